use api::export::{data_url, reservations_to_csv, to_json};
use api::{ListQuery, Reservation, ReservationStatus};
use dioxus::prelude::*;

use super::{sort_header, Pagination};
use crate::session::use_config;

/// Reservation list with search, status/area filter, sortable columns and paging.
///
/// In admin mode each row gets status and delete controls plus an edit button;
/// otherwise only still-active reservations get a cancel button.
#[component]
pub fn ReservationTable(
    reservations: Vec<Reservation>,
    #[props(default)] admin: bool,
    #[props(default)] on_status: Option<EventHandler<(i64, ReservationStatus)>>,
    #[props(default)] on_edit: Option<EventHandler<Reservation>>,
    #[props(default)] on_delete: Option<EventHandler<i64>>,
    #[props(default)] on_cancel: Option<EventHandler<i64>>,
) -> Element {
    let config = use_config();
    let mut query = use_signal(move || {
        let mut q = ListQuery::with_page_size(config.listing.page_size);
        q.sort_by = Some("date".to_string());
        q
    });

    let page = query().apply(&reservations);
    let q = query();

    let csv_href = data_url("text/csv", &reservations_to_csv(&reservations));
    let json_href = to_json(&reservations)
        .map(|json| data_url("application/json", &json))
        .unwrap_or_default();

    rsx! {
        div {
            class: "table-toolbar",
            input {
                class: "table-search",
                r#type: "search",
                placeholder: "Search by name, email or phone",
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
                option { value: "", "All" }
                for status in ReservationStatus::ALL {
                    option { key: "{status}", value: "{status}", "{status}" }
                }
                option { value: "INDOOR", "Indoor" }
                option { value: "OUTDOOR", "Outdoor" }
            }
            if admin {
                a { class: "btn btn--outline btn--small", href: csv_href, download: "reservations.csv", "Export CSV" }
                a { class: "btn btn--outline btn--small", href: json_href, download: "reservations.json", "Export JSON" }
            }
        }

        if page.items.is_empty() {
            p { class: "table-empty", "No reservations found." }
        } else {
            table {
                class: "table",
                thead {
                    tr {
                        {sort_header(query, "date", "Date")}
                        {sort_header(query, "name", "Name")}
                        if admin {
                            {sort_header(query, "email", "Email")}
                            th { "Phone" }
                        }
                        {sort_header(query, "people", "Guests")}
                        {sort_header(query, "area", "Area")}
                        {sort_header(query, "status", "Status")}
                        th { "" }
                    }
                }
                tbody {
                    for r in page.items.iter().cloned() {
                        tr {
                            key: "{r.id}",
                            td { "{r.display_when()}" }
                            td {
                                "{r.name}"
                                if let Some(notes) = &r.special_requests {
                                    span { class: "table-note", title: "{notes}", " ✎" }
                                }
                            }
                            if admin {
                                td { "{r.email}" }
                                td { "{r.phone}" }
                            }
                            td { "{r.number_of_people}" }
                            td { "{r.reservation_area}" }
                            td {
                                if admin {
                                    select {
                                        value: r.status.as_str(),
                                        onchange: move |evt: FormEvent| {
                                            if let (Some(handler), Some(status)) = (on_status, ReservationStatus::parse(&evt.value())) {
                                                handler.call((r.id, status));
                                            }
                                        },
                                        for status in ReservationStatus::ALL {
                                            option { key: "{status}", value: "{status}", "{status}" }
                                        }
                                    }
                                } else {
                                    span { class: "status status--{r.status.slug()}", "{r.status}" }
                                }
                            }
                            td {
                                class: "table-actions",
                                if admin {
                                    if let Some(handler) = on_edit {
                                        button {
                                            class: "btn btn--outline btn--small",
                                            onclick: {
                                                let r = r.clone();
                                                move |_| handler.call(r.clone())
                                            },
                                            "Edit"
                                        }
                                    }
                                    if let Some(handler) = on_delete {
                                        button {
                                            class: "btn btn--danger btn--small",
                                            onclick: move |_| handler.call(r.id),
                                            "Delete"
                                        }
                                    }
                                } else if r.status != ReservationStatus::Cancelled {
                                    if let Some(handler) = on_cancel {
                                        button {
                                            class: "btn btn--danger btn--small",
                                            onclick: move |_| handler.call(r.id),
                                            "Cancel"
                                        }
                                    }
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
