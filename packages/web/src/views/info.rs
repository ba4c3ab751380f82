//! Static informational pages rendered from bundled markdown.

use dioxus::prelude::*;
use ui::Markdown;

use crate::Route;

const HOME_MD: &str = include_str!("../../content/home.md");
const MENU_MD: &str = include_str!("../../content/menu.md");
const ABOUT_MD: &str = include_str!("../../content/about.md");

#[component]
pub fn Home() -> Element {
    rsx! {
        section {
            class: "hero",
            h1 { "La Terraza" }
            p { class: "hero-tagline", "Mediterranean cooking, market produce, a terrace under the vines." }
            Link { class: "btn btn--primary", to: Route::NewReservation {}, "Book a table" }
        }
        Markdown { content: HOME_MD.to_string() }
    }
}

#[component]
pub fn Menu() -> Element {
    rsx! {
        Markdown { content: MENU_MD.to_string(), class: "prose menu" }
    }
}

#[component]
pub fn About() -> Element {
    rsx! {
        Markdown { content: ABOUT_MD.to_string() }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div {
            class: "not-found",
            h1 { "Page not found" }
            p { "There is nothing at /{path}." }
            Link { to: Route::Home {}, "Back to the home page" }
        }
    }
}
