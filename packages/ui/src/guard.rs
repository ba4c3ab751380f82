use api::guard::evaluate;
use api::{Access, GuardDecision};
use dioxus::prelude::*;

use crate::session::use_session;

/// Renders `children` only when the session satisfies `access`; otherwise
/// replaces the current route with the guard's redirect target.
#[component]
pub fn Protected(access: Access, children: Element) -> Element {
    let session = use_session();
    let nav = use_navigator();

    use_effect(move || {
        if let GuardDecision::Redirect(to) = evaluate(&session(), access) {
            tracing::info!("Route guard redirecting to {}", to);
            nav.replace(to);
        }
    });

    match evaluate(&session(), access) {
        GuardDecision::Allow => rsx! { {children} },
        GuardDecision::Pending | GuardDecision::Redirect(_) => rsx! {},
    }
}
