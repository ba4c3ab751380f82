use api::{AdminUser, Role, UserRequest, ValidationErrors};
use dioxus::prelude::*;

use super::{field_error, report_error};
use crate::banner::{Banner, BannerKind};
use crate::field::FormField;
use crate::session::use_api;

/// Admin create/edit form for a user account.
#[component]
pub fn UserForm(
    #[props(default)] editing: Option<AdminUser>,
    on_saved: EventHandler<AdminUser>,
    on_cancel: EventHandler<()>,
) -> Element {
    let api = use_api();
    let editing_id = editing.as_ref().map(|u| u.id);

    let mut draft = use_signal(move || {
        editing
            .as_ref()
            .map(UserRequest::from)
            .unwrap_or_else(|| UserRequest {
                enabled: true,
                ..UserRequest::default()
            })
    });
    let mut field_errors = use_signal(ValidationErrors::new);
    let mut server_error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        spawn(async move {
            field_errors.set(ValidationErrors::new());
            server_error.set(None);
            let request = draft();

            loading.set(true);
            let result = match editing_id {
                Some(id) => api.update_user(id, &request).await,
                None => api.create_user(&request).await,
            };
            loading.set(false);

            match result {
                Ok(saved) => {
                    tracing::info!("User {} saved", saved.email);
                    on_saved.call(saved);
                }
                Err(e) => report_error(e, field_errors, server_error),
            }
        });
    };

    let d = draft();
    let password_label = if editing_id.is_some() {
        "New password (leave blank to keep)"
    } else {
        "Password"
    };

    rsx! {
        form {
            class: "form user-form",
            onsubmit: handle_submit,

            h2 {
                if editing_id.is_some() { "Edit user" } else { "New user" }
            }

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
                    id: "user-name",
                    label: "Name",
                    error: field_error(&field_errors, "name"),
                    input {
                        id: "user-name",
                        r#type: "text",
                        value: d.name.clone(),
                        oninput: move |evt: FormEvent| draft.write().name = evt.value(),
                    }
                }
                FormField {
                    id: "user-surname",
                    label: "Surname",
                    error: field_error(&field_errors, "surname"),
                    input {
                        id: "user-surname",
                        r#type: "text",
                        value: d.surname.clone(),
                        oninput: move |evt: FormEvent| draft.write().surname = evt.value(),
                    }
                }
            }

            FormField {
                id: "user-email",
                label: "Email",
                error: field_error(&field_errors, "email"),
                input {
                    id: "user-email",
                    r#type: "email",
                    value: d.email.clone(),
                    oninput: move |evt: FormEvent| draft.write().email = evt.value(),
                }
            }

            FormField {
                id: "user-password",
                label: password_label.to_string(),
                error: field_error(&field_errors, "password"),
                input {
                    id: "user-password",
                    r#type: "password",
                    autocomplete: "new-password",
                    value: d.password.clone().unwrap_or_default(),
                    oninput: move |evt: FormEvent| draft.write().password = Some(evt.value()),
                }
            }

            div {
                class: "form-row",
                FormField {
                    id: "user-role",
                    label: "Role",
                    select {
                        id: "user-role",
                        value: d.role.as_str(),
                        onchange: move |evt: FormEvent| {
                            draft.write().role = if evt.value() == "ADMIN" { Role::Admin } else { Role::User };
                        },
                        option { value: "USER", "User" }
                        option { value: "ADMIN", "Administrator" }
                    }
                }
                label {
                    class: "form-check",
                    input {
                        r#type: "checkbox",
                        checked: d.enabled,
                        onchange: move |evt: FormEvent| draft.write().enabled = evt.checked(),
                    }
                    " Enabled"
                }
            }

            div {
                class: "form-actions",
                button {
                    class: "btn btn--primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Saving..." } else { "Save" }
                }
                button {
                    class: "btn btn--outline",
                    r#type: "button",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}
