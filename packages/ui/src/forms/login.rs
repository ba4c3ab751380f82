use api::{AuthResponse, LoginRequest, ValidationErrors};
use dioxus::prelude::*;

use super::{field_error, report_error};
use crate::banner::{Banner, BannerKind};
use crate::field::FormField;
use crate::session::use_api;

/// Email/password sign-in form.
#[component]
pub fn LoginForm(on_success: EventHandler<AuthResponse>) -> Element {
    let api = use_api();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut field_errors = use_signal(ValidationErrors::new);
    let mut server_error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        spawn(async move {
            field_errors.set(ValidationErrors::new());
            server_error.set(None);

            let request = LoginRequest {
                email: email().trim().to_string(),
                password: password(),
            };

            loading.set(true);
            let result = api.login(&request).await;
            loading.set(false);
            match result {
                Ok(response) => on_success.call(response),
                Err(e) => report_error(e, field_errors, server_error),
            }
        });
    };

    rsx! {
        form {
            class: "form",
            onsubmit: handle_login,

            if let Some(err) = server_error() {
                Banner {
                    kind: BannerKind::Error,
                    message: err,
                    on_dismiss: move |_| server_error.set(None),
                }
            }

            FormField {
                id: "login-email",
                label: "Email",
                error: field_error(&field_errors, "email"),
                input {
                    id: "login-email",
                    r#type: "email",
                    autocomplete: "email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
            }

            FormField {
                id: "login-password",
                label: "Password",
                error: field_error(&field_errors, "password"),
                input {
                    id: "login-password",
                    r#type: "password",
                    autocomplete: "current-password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
            }

            button {
                class: "btn btn--primary btn--block",
                r#type: "submit",
                disabled: loading(),
                if loading() { "Signing in..." } else { "Sign in" }
            }
        }
    }
}
