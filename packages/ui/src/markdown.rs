//! Markdown rendering for the informational pages.

use dioxus::prelude::*;
use pulldown_cmark::{html, Options, Parser};

pub fn render_markdown(source: &str) -> String {
    let parser = Parser::new_ext(source, Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH);
    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// Renders trusted, bundled markdown. Never pass user input here.
#[component]
pub fn Markdown(content: String, #[props(default = "prose".to_string())] class: String) -> Element {
    let html = render_markdown(&content);

    rsx! {
        div {
            class: "{class}",
            dangerous_inner_html: "{html}",
        }
    }
}
