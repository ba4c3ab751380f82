//! Registration page.

use dioxus::prelude::*;
use ui::{use_session, RegisterForm};

use crate::Route;

#[component]
pub fn Register() -> Element {
    let session = use_session();
    let nav = use_navigator();

    // If already logged in, redirect home
    use_effect(move || {
        let state = session();
        if !state.loading && state.is_authenticated() {
            nav.replace(Route::Home {});
        }
    });

    rsx! {
        div {
            class: "auth-card",
            h1 { "Create account" }
            p { class: "auth-subtitle", "Keep track of your bookings and get confirmations by email." }

            RegisterForm {
                on_success: move |_| {
                    nav.push(Route::Home {});
                },
            }

            p {
                class: "auth-footer",
                "Already have an account? "
                Link { to: Route::Login {}, "Sign in" }
            }
        }
    }
}
