use api::export::{data_url, to_json, users_to_csv};
use api::{AdminUser, ListQuery};
use dioxus::prelude::*;

use super::{sort_header, Pagination};
use crate::session::use_config;

/// Back-office user list.
#[component]
pub fn UserTable(
    users: Vec<AdminUser>,
    on_open: EventHandler<i64>,
    on_edit: EventHandler<AdminUser>,
    on_toggle_enabled: EventHandler<(i64, bool)>,
    on_delete: EventHandler<i64>,
) -> Element {
    let config = use_config();
    let mut query = use_signal(move || ListQuery::with_page_size(config.listing.page_size));

    let page = query().apply(&users);
    let q = query();

    let csv_href = data_url("text/csv", &users_to_csv(&users));
    let json_href = to_json(&users)
        .map(|json| data_url("application/json", &json))
        .unwrap_or_default();

    rsx! {
        div {
            class: "table-toolbar",
            input {
                class: "table-search",
                r#type: "search",
                placeholder: "Search by name or email",
                value: q.search.clone(),
                oninput: move |evt: FormEvent| {
                    let mut q = query.write();
                    q.search = evt.value();
                    q.page = 1;
                },
            }
            select {
                class: "table-filter",
                value: q.filter.clone().unwrap_or_default(),
                onchange: move |evt: FormEvent| {
                    let value = evt.value();
                    let mut q = query.write();
                    q.filter = (!value.is_empty()).then_some(value);
                    q.page = 1;
                },
                option { value: "", "All users" }
                option { value: "ADMIN", "Administrators" }
                option { value: "USER", "Customers" }
                option { value: "enabled", "Enabled" }
                option { value: "disabled", "Disabled" }
                option { value: "unverified", "Unverified email" }
            }
            a { class: "btn btn--outline btn--small", href: csv_href, download: "users.csv", "Export CSV" }
            a { class: "btn btn--outline btn--small", href: json_href, download: "users.json", "Export JSON" }
        }

        if page.items.is_empty() {
            p { class: "table-empty", "No users found." }
        } else {
            table {
                class: "table",
                thead {
                    tr {
                        {sort_header(query, "name", "Name")}
                        {sort_header(query, "email", "Email")}
                        {sort_header(query, "role", "Role")}
                        th { "Status" }
                        {sort_header(query, "reservations", "Reservations")}
                        {sort_header(query, "createdAt", "Created")}
                        {sort_header(query, "lastLogin", "Last login")}
                        th { "" }
                    }
                }
                tbody {
                    for u in page.items.iter().cloned() {
                        tr {
                            key: "{u.id}",
                            td {
                                a {
                                    class: "table-link",
                                    href: "#",
                                    onclick: move |evt: MouseEvent| {
                                        evt.prevent_default();
                                        on_open.call(u.id);
                                    },
                                    "{u.full_name()}"
                                }
                            }
                            td {
                                "{u.email}"
                                if !u.email_verified {
                                    span { class: "badge badge--warning", "unverified" }
                                }
                            }
                            td { span { class: "badge", "{u.role}" } }
                            td {
                                if u.enabled { "Enabled" } else { "Disabled" }
                            }
                            td { "{u.reservations_count}" }
                            td { "{u.display_created()}" }
                            td { "{u.display_last_login()}" }
                            td {
                                class: "table-actions",
                                button {
                                    class: "btn btn--outline btn--small",
                                    onclick: {
                                        let u = u.clone();
                                        move |_| on_edit.call(u.clone())
                                    },
                                    "Edit"
                                }
                                button {
                                    class: "btn btn--outline btn--small",
                                    onclick: move |_| on_toggle_enabled.call((u.id, !u.enabled)),
                                    if u.enabled { "Disable" } else { "Enable" }
                                }
                                button {
                                    class: "btn btn--danger btn--small",
                                    onclick: move |_| on_delete.call(u.id),
                                    "Delete"
                                }
                            }
                        }
                    }
                }
            }
            Pagination {
                page: page.page,
                total_pages: page.total_pages,
                total_items: page.total_items,
                on_change: move |p| query.write().page = p,
            }
        }
    }
}
