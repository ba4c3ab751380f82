use api::{AuthResponse, RegisterRequest, ValidationErrors};
use dioxus::prelude::*;

use super::{field_error, report_error};
use crate::banner::{Banner, BannerKind};
use crate::field::FormField;
use crate::session::use_api;

/// Account creation form.
#[component]
pub fn RegisterForm(on_success: EventHandler<AuthResponse>) -> Element {
    let api = use_api();
    let mut name = use_signal(String::new);
    let mut surname = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut field_errors = use_signal(ValidationErrors::new);
    let mut server_error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        spawn(async move {
            field_errors.set(ValidationErrors::new());
            server_error.set(None);

            let request = RegisterRequest {
                name: name().trim().to_string(),
                surname: surname().trim().to_string(),
                email: email().trim().to_string(),
                password: password(),
                confirm_password: confirm_password(),
            };

            loading.set(true);
            let result = api.register(&request).await;
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
            onsubmit: handle_register,

            if let Some(err) = server_error() {
                Banner {
                    kind: BannerKind::Error,
                    message: err,
                    on_dismiss: move |_| server_error.set(None),
                }
            }

            div {
                class: "form-row",
                FormField {
                    id: "register-name",
                    label: "Name",
                    error: field_error(&field_errors, "name"),
                    input {
                        id: "register-name",
                        r#type: "text",
                        value: name(),
                        oninput: move |evt: FormEvent| name.set(evt.value()),
                    }
                }
                FormField {
                    id: "register-surname",
                    label: "Surname",
                    error: field_error(&field_errors, "surname"),
                    input {
                        id: "register-surname",
                        r#type: "text",
                        value: surname(),
                        oninput: move |evt: FormEvent| surname.set(evt.value()),
                    }
                }
            }

            FormField {
                id: "register-email",
                label: "Email",
                error: field_error(&field_errors, "email"),
                input {
                    id: "register-email",
                    r#type: "email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
            }

            FormField {
                id: "register-password",
                label: "Password",
                error: field_error(&field_errors, "password"),
                input {
                    id: "register-password",
                    r#type: "password",
                    placeholder: "At least 8 characters, with a number",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
            }

            FormField {
                id: "register-confirm",
                label: "Confirm password",
                error: field_error(&field_errors, "confirmPassword"),
                input {
                    id: "register-confirm",
                    r#type: "password",
                    value: confirm_password(),
                    oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                }
            }

            button {
                class: "btn btn--primary btn--block",
                r#type: "submit",
                disabled: loading(),
                if loading() { "Creating account..." } else { "Create account" }
            }
        }
    }
}
