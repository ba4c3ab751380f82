use api::UserActivity;
use dioxus::prelude::*;

/// Read-only audit trail for one user, newest first.
#[component]
pub fn ActivityLog(entries: Vec<UserActivity>) -> Element {
    if entries.is_empty() {
        return rsx! {
            p { class: "table-empty", "No recorded activity." }
        };
    }

    let mut sorted = entries;
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    rsx! {
        ul {
            class: "activity-log",
            for entry in sorted {
                li {
                    class: if entry.activity_type.is_warning() { "activity-log-entry warning" } else { "activity-log-entry" },
                    span { class: "activity-log-time", "{entry.display_time()}" }
                    span { class: "activity-log-type", "{entry.activity_type.label()}" }
                    span { class: "activity-log-description", "{entry.description}" }
                    if let Some(by) = &entry.performed_by_user_name {
                        span { class: "activity-log-actor", "by {by}" }
                    }
                }
            }
        }
    }
}
