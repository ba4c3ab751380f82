use dioxus::prelude::*;

use crate::icons::{FaCalendarCheck, FaUserShield, FaUtensils};
use crate::session::{use_session, LogoutButton};
use crate::Icon;

const UI_CSS: Asset = asset!("/assets/ui.css");

/// Top navigation. Links depend on the session role; hiding a link is a
/// convenience, the backend still authorizes every request.
#[component]
pub fn Navbar() -> Element {
    let session = use_session();
    let state = session();
    let signed_in = state.user.clone().filter(|_| state.is_authenticated());

    rsx! {
        document::Link { rel: "stylesheet", href: UI_CSS }
        nav {
            class: "navbar",
            Link {
                class: "navbar-brand",
                to: "/",
                Icon { icon: FaUtensils, width: 18, height: 18 }
                " La Terraza"
            }
            div {
                class: "navbar-links",
                Link { to: "/menu", "Menu" }
                Link { to: "/about", "About" }
                Link {
                    class: "navbar-cta",
                    to: "/reservations/new",
                    Icon { icon: FaCalendarCheck, width: 14, height: 14 }
                    " Book a table"
                }
            }
            div {
                class: "navbar-session",
                if !state.loading {
                    if let Some(user) = signed_in {
                        if user.is_admin() {
                            Link {
                                to: "/admin/reservations",
                                Icon { icon: FaUserShield, width: 14, height: 14 }
                                " Reservations"
                            }
                            Link { to: "/admin/users", "Users" }
                        }
                        Link { to: "/reservations/mine", "My reservations" }
                        span { class: "navbar-user", "{user.email}" }
                        LogoutButton { class: "btn btn--outline btn--small" }
                    } else {
                        Link { to: "/login", "Sign in" }
                        Link { class: "btn btn--primary btn--small", to: "/register", "Register" }
                    }
                }
            }
        }
    }
}
