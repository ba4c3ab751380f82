use dioxus::prelude::*;

/// Catches render errors anywhere below the shell and offers a way out.
#[component]
pub fn ShellBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |errors: ErrorContext| {
                tracing::error!("Render error caught at shell root: {:?}", errors);
                rsx! {
                    div {
                        class: "shell-error",
                        h2 { "Something went wrong" }
                        p { "This page failed to render. You can try again or return home." }
                        div {
                            class: "shell-error-actions",
                            button {
                                class: "btn btn--primary",
                                onclick: move |_| errors.clear_errors(),
                                "Try again"
                            }
                            a { class: "btn btn--outline", href: "/", "Go home" }
                        }
                    }
                }
            },
            {children}
        }
    }
}
