//! Admin user management.

use api::{Access, AdminUser, Role};
use dioxus::prelude::*;
use ui::{
    use_api, ActivityLog, Banner, BannerKind, ConfirmDialog, Modal, Protected, UserForm, UserTable,
};

use crate::Route;

/// Which user form is open, if any.
#[derive(Clone, PartialEq)]
enum Editor {
    Closed,
    Create,
    Edit(AdminUser),
}

#[component]
pub fn AdminUsers() -> Element {
    rsx! {
        Protected {
            access: Access::Role(Role::Admin),
            UserDirectory {}
        }
    }
}

#[component]
fn UserDirectory() -> Element {
    let api = use_api();
    let nav = use_navigator();
    let mut editor = use_signal(|| Editor::Closed);
    let mut deleting = use_signal(|| Option::<i64>::None);
    let mut error = use_signal(|| Option::<String>::None);

    let mut users = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move {
                if let Err(e) = api.authorize(Access::Role(Role::Admin)) {
                    return Err(e);
                }
                api.admin_users().await
            }
        }
    });

    let toggle_enabled = {
        let api = api.clone();
        move |(id, enabled): (i64, bool)| {
            let api = api.clone();
            spawn(async move {
                match api.set_user_enabled(id, enabled).await {
                    Ok(_) => users.restart(),
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        }
    };

    let confirm_delete = move |_| {
        let Some(id) = deleting() else {
            return;
        };
        deleting.set(None);
        let api = api.clone();
        spawn(async move {
            match api.delete_user(id).await {
                Ok(()) => {
                    tracing::info!("User {} deleted", id);
                    users.restart();
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    rsx! {
        div {
            class: "page-header",
            h1 { "Users" }
            button {
                class: "btn btn--primary",
                onclick: move |_| editor.set(Editor::Create),
                "New user"
            }
        }

        if let Some(message) = error() {
            Banner {
                kind: BannerKind::Error,
                message: message,
                on_dismiss: move |_| error.set(None),
            }
        }

        match &*users.read() {
            Some(Ok(list)) => rsx! {
                UserTable {
                    users: list.clone(),
                    on_open: move |id| {
                        nav.push(Route::AdminUserDetail { id });
                    },
                    on_edit: move |user| editor.set(Editor::Edit(user)),
                    on_toggle_enabled: toggle_enabled.clone(),
                    on_delete: move |id| deleting.set(Some(id)),
                }
            },
            Some(Err(e)) => rsx! {
                p { class: "error", "Could not load users: {e}" }
            },
            None => rsx! {
                p { class: "loading", "Loading users..." }
            },
        }

        match editor() {
            Editor::Closed => rsx! {},
            Editor::Create => rsx! {
                Modal {
                    on_close: move |_| editor.set(Editor::Closed),
                    h2 { "New user" }
                    UserForm {
                        on_saved: move |_| {
                            editor.set(Editor::Closed);
                            users.restart();
                        },
                        on_cancel: move |_| editor.set(Editor::Closed),
                    }
                }
            },
            Editor::Edit(user) => rsx! {
                Modal {
                    on_close: move |_| editor.set(Editor::Closed),
                    h2 { "Edit {user.full_name()}" }
                    UserForm {
                        editing: user.clone(),
                        on_saved: move |_| {
                            editor.set(Editor::Closed);
                            users.restart();
                        },
                        on_cancel: move |_| editor.set(Editor::Closed),
                    }
                }
            },
        }

        if deleting().is_some() {
            ConfirmDialog {
                message: "Delete this user? Their reservations stay on record.",
                on_confirm: confirm_delete,
                on_cancel: move |_| deleting.set(None),
            }
        }
    }
}

#[component]
pub fn AdminUserDetail(id: i64) -> Element {
    rsx! {
        Protected {
            access: Access::Role(Role::Admin),
            UserDetail { key: "{id}", id }
        }
    }
}

/// Keyed by `id` in [`AdminUserDetail`], so moving between users remounts it
/// and refetches.
#[component]
fn UserDetail(id: i64) -> Element {
    let api = use_api();

    let user = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move {
                if let Err(e) = api.authorize(Access::Role(Role::Admin)) {
                    return Err(e);
                }
                api.admin_user(id).await
            }
        }
    });
    let activities = use_resource(move || {
        let api = api.clone();
        async move {
            if let Err(e) = api.authorize(Access::Role(Role::Admin)) {
                return Err(e);
            }
            api.user_activities(id).await
        }
    });

    rsx! {
        div {
            class: "page-header",
            Link { class: "btn btn--outline", to: Route::AdminUsers {}, "Back to users" }
        }

        match &*user.read() {
            Some(Ok(user)) => rsx! {
                section {
                    class: "user-card",
                    h1 { "{user.full_name()}" }
                    dl {
                        dt { "Email" }
                        dd { "{user.email}" }
                        dt { "Role" }
                        dd { "{user.role}" }
                        dt { "Status" }
                        dd { if user.enabled { "Enabled" } else { "Disabled" } }
                        dt { "Created" }
                        dd { "{user.display_created()}" }
                        dt { "Last login" }
                        dd { "{user.display_last_login()}" }
                    }
                }
            },
            Some(Err(e)) => rsx! {
                p { class: "error", "Could not load user: {e}" }
            },
            None => rsx! {
                p { class: "loading", "Loading user..." }
            },
        }

        h2 { "Activity" }
        match &*activities.read() {
            Some(Ok(entries)) => rsx! {
                ActivityLog { entries: entries.clone() }
            },
            Some(Err(e)) => rsx! {
                p { class: "error", "Could not load activity: {e}" }
            },
            None => rsx! {
                p { class: "loading", "Loading activity..." }
            },
        }
    }
}
