//! Session context and hooks for the UI.
//!
//! [`SessionProvider`] owns the one [`AppGateway`] for the page. The gateway's
//! [`SessionStore`] is mirrored into a `Signal<SessionState>` through the
//! store's change listener, so components re-render when the session changes
//! for any reason: a form logging in, the logout button, the expiry loop, or
//! the gateway reacting to a 401/403.

use std::cell::RefCell;
use std::rc::Rc;

use api::clock::now_unix;
use api::{Gateway, ReqwestTransport, SessionState, SessionStore};
use dioxus::prelude::*;
use store::ClientConfig;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type AppStorage = store::LocalStorageStore;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type AppStorage = store::MemoryStore;

pub type AppGateway = Gateway<ReqwestTransport, AppStorage, BrowserNavigator>;

fn make_storage() -> AppStorage {
    AppStorage::new()
}

/// Full page loads through `window.location`, dropping all in-memory state.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl api::Navigator for BrowserNavigator {
    fn hard_navigate(&self, path: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.location().set_href(path) {
                    tracing::error!("Failed to navigate to {}: {:?}", path, e);
                }
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            tracing::warn!("Hard navigation to {} is only available in the browser", path);
        }
    }
}

/// Shared handle to the page's gateway.
#[derive(Clone)]
pub struct ApiHandle(pub Rc<AppGateway>);

impl PartialEq for ApiHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl std::ops::Deref for ApiHandle {
    type Target = AppGateway;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Get the current session state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Get the gateway for backend calls.
pub fn use_api() -> ApiHandle {
    use_context::<ApiHandle>()
}

/// Get the client configuration the provider was created with.
pub fn use_config() -> ClientConfig {
    use_context::<ClientConfig>()
}

/// Provider component that hydrates the session and keeps it fresh.
/// Wrap your app with this component to enable the session and gateway hooks.
#[component]
pub fn SessionProvider(config: ClientConfig, children: Element) -> Element {
    let base_url = config.api.base_url.clone();
    let api = use_hook(move || {
        let mut session = SessionStore::hydrate(make_storage());
        // Startup check; the loop below covers the rest of the page's life.
        session.check_expiry(now_unix());
        ApiHandle(Rc::new(Gateway::new(
            base_url,
            ReqwestTransport::new(),
            Rc::new(RefCell::new(session)),
            BrowserNavigator,
        )))
    });

    let session_state = use_signal({
        let api = api.clone();
        move || api.session().borrow().state().clone()
    });

    use_hook({
        let api = api.clone();
        move || {
            api.session()
                .borrow_mut()
                .on_change(move |state| {
                    let mut signal = session_state;
                    signal.set(state.clone());
                });
        }
    });

    // Periodic expiry check
    let interval = config.session.check_interval();
    use_effect({
        let api = api.clone();
        move || {
            let Some(period) = interval else {
                tracing::info!("Periodic session expiry check disabled");
                return;
            };
            let api = api.clone();
            spawn(async move {
                loop {
                    #[cfg(target_arch = "wasm32")]
                    gloo_timers::future::sleep(period).await;
                    #[cfg(not(target_arch = "wasm32"))]
                    tokio::time::sleep(period).await;

                    api.session().borrow_mut().tick(now_unix());
                }
            });
        }
    });

    use_context_provider(|| session_state);
    use_context_provider(|| api.clone());
    use_context_provider(|| config.clone());

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let api = use_api();
    let nav = use_navigator();

    let onclick = move |_| {
        api.logout();
        nav.push("/");
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
