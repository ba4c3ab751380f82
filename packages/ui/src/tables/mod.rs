//! Collection views over already-fetched rows. Search, filter, sort and paging
//! are all applied locally through [`api::ListQuery`].

mod pagination;
mod reservations;
mod users;

pub use pagination::Pagination;
pub use reservations::ReservationTable;
pub use users::UserTable;

use api::{ListQuery, SortDir};
use dioxus::prelude::*;

/// Header label with the current sort arrow.
pub(crate) fn sort_label(query: &ListQuery, column: &str, label: &str) -> String {
    match (query.sort_by.as_deref() == Some(column), query.sort_dir) {
        (true, SortDir::Asc) => format!("{label} ▲"),
        (true, SortDir::Desc) => format!("{label} ▼"),
        (false, _) => label.to_string(),
    }
}

/// Clickable column header that toggles sorting on `column`.
pub(crate) fn sort_header(
    mut query: Signal<ListQuery>,
    column: &'static str,
    label: &'static str,
) -> Element {
    let text = sort_label(&query.read(), column, label);
    rsx! {
        th {
            class: "sortable",
            onclick: move |_| query.write().toggle_sort(column),
            "{text}"
        }
    }
}
