use dioxus::prelude::*;

use store::ClientConfig;
use ui::{Navbar, SessionProvider, ShellBoundary};
use views::{
    About, AdminReservations, AdminUserDetail, AdminUsers, Home, Login, Menu, MyReservations,
    NewReservation, NotFound, Register,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/menu")]
        Menu {},
        #[route("/about")]
        About {},
        #[route("/reservations/new")]
        NewReservation {},
        #[route("/reservations/mine")]
        MyReservations {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/admin/users")]
        AdminUsers {},
        #[route("/admin/users/:id")]
        AdminUserDetail { id: i64 },
        #[route("/admin/reservations")]
        AdminReservations {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = ClientConfig::from_build_env();
    tracing::info!("Restaurant client using API at {}", config.api.base_url);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Title { "La Terraza" }

        ShellBoundary {
            SessionProvider {
                config: config,
                Router::<Route> {}
            }
        }
    }
}

/// Page chrome shared by every route.
#[component]
fn Shell() -> Element {
    rsx! {
        Navbar {}
        main {
            class: "page",
            Outlet::<Route> {}
        }
        footer {
            class: "footer",
            "La Terraza · Calle Mayor 12 · Closed on Mondays"
        }
    }
}
