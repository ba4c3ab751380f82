use dioxus::prelude::*;

#[component]
pub fn Pagination(
    page: usize,
    total_pages: usize,
    total_items: usize,
    on_change: EventHandler<usize>,
) -> Element {
    rsx! {
        div {
            class: "pagination",
            button {
                class: "btn btn--outline btn--small",
                disabled: page <= 1,
                onclick: move |_| on_change.call(page.saturating_sub(1).max(1)),
                "Previous"
            }
            span {
                class: "pagination-status",
                "Page {page} of {total_pages} · {total_items} total"
            }
            button {
                class: "btn btn--outline btn--small",
                disabled: page >= total_pages,
                onclick: move |_| on_change.call((page + 1).min(total_pages)),
                "Next"
            }
        }
    }
}
