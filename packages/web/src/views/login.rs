//! Sign-in page.

use api::Role;
use dioxus::prelude::*;
use ui::{use_session, LoginForm};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let session = use_session();
    let nav = use_navigator();

    // Already signed in: admins land on the reservation desk, everyone else at home
    use_effect(move || {
        let state = session();
        if state.loading || !state.is_authenticated() {
            return;
        }
        if state.is_admin() {
            nav.replace(Route::AdminReservations {});
        } else {
            nav.replace(Route::Home {});
        }
    });

    rsx! {
        div {
            class: "auth-card",
            h1 { "Sign in" }
            p { class: "auth-subtitle", "Manage your reservations at La Terraza." }

            LoginForm {
                on_success: move |response: api::AuthResponse| {
                    if response.role == Role::Admin {
                        nav.push(Route::AdminReservations {});
                    } else {
                        nav.push(Route::Home {});
                    }
                },
            }

            p {
                class: "auth-footer",
                "No account yet? "
                Link { to: Route::Register {}, "Create one" }
            }
        }
    }
}
