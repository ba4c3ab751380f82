use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BannerKind {
    Error,
    Success,
    Info,
}

/// Dismissible message strip shown above forms and tables.
#[component]
pub fn Banner(kind: BannerKind, message: String, on_dismiss: EventHandler<()>) -> Element {
    let class = match kind {
        BannerKind::Error => "banner banner--error",
        BannerKind::Success => "banner banner--success",
        BannerKind::Info => "banner banner--info",
    };

    rsx! {
        div {
            class: "{class}",
            role: "alert",
            span { class: "banner-message", "{message}" }
            button {
                class: "banner-dismiss",
                r#type: "button",
                title: "Dismiss",
                onclick: move |_| on_dismiss.call(()),
                "×"
            }
        }
    }
}
