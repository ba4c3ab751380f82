use dioxus::prelude::*;

/// Label + control + inline validation message.
#[component]
pub fn FormField(
    id: String,
    label: String,
    #[props(default)] error: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: if error.is_some() { "form-field form-field--invalid" } else { "form-field" },
            label { r#for: "{id}", "{label}" }
            {children}
            if let Some(ref err) = error {
                p { class: "form-field-error", "{err}" }
            }
        }
    }
}
