//! Customer reservation pages.

use api::Access;
use dioxus::prelude::*;
use ui::{
    use_api, use_session, Banner, BannerKind, ConfirmDialog, Protected, ReservationForm,
    ReservationTable,
};

use crate::Route;

/// Open to guests; signed-in customers get the booking under their account.
#[component]
pub fn NewReservation() -> Element {
    let session = use_session();

    rsx! {
        div {
            class: "page-header",
            h1 { "Book a table" }
            if session().is_authenticated() {
                Link { class: "btn btn--outline", to: Route::MyReservations {}, "My reservations" }
            }
        }
        ReservationForm {
            on_saved: move |_| {},
        }
    }
}

#[component]
pub fn MyReservations() -> Element {
    rsx! {
        Protected {
            access: Access::Authenticated,
            ReservationHistory {}
        }
    }
}

/// Rendered only once the guard allows it, so the fetch never runs for a
/// signed-out visitor.
#[component]
fn ReservationHistory() -> Element {
    let api = use_api();
    let mut cancelling = use_signal(|| Option::<i64>::None);
    let mut error = use_signal(|| Option::<String>::None);

    let mut reservations = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move {
                if let Err(e) = api.authorize(Access::Authenticated) {
                    return Err(e);
                }
                api.my_reservations().await
            }
        }
    });

    let confirm_cancel = move |_| {
        let Some(id) = cancelling() else {
            return;
        };
        cancelling.set(None);
        let api = api.clone();
        spawn(async move {
            match api.cancel_reservation(id).await {
                Ok(_) => {
                    tracing::info!("Reservation {} cancelled", id);
                    reservations.restart();
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    rsx! {
        div {
            class: "page-header",
            h1 { "My reservations" }
            Link { class: "btn btn--primary", to: Route::NewReservation {}, "New reservation" }
        }

        if let Some(message) = error() {
            Banner {
                kind: BannerKind::Error,
                message: message,
                on_dismiss: move |_| error.set(None),
            }
        }

        match &*reservations.read() {
            Some(Ok(list)) if list.is_empty() => rsx! {
                p { class: "empty-state", "You have no reservations yet." }
            },
            Some(Ok(list)) => rsx! {
                ReservationTable {
                    reservations: list.clone(),
                    on_cancel: move |id| cancelling.set(Some(id)),
                }
            },
            Some(Err(e)) => rsx! {
                p { class: "error", "Could not load your reservations: {e}" }
            },
            None => rsx! {
                p { class: "loading", "Loading reservations..." }
            },
        }

        if cancelling().is_some() {
            ConfirmDialog {
                message: "Cancel this reservation? The table will be released.",
                confirm_label: "Cancel reservation",
                on_confirm: confirm_cancel,
                on_cancel: move |_| cancelling.set(None),
            }
        }
    }
}
