//! Admin reservation management.

use api::{Access, Reservation, ReservationStatus, Role};
use dioxus::prelude::*;
use ui::{
    use_api, Banner, BannerKind, ConfirmDialog, Modal, Protected, ReservationForm,
    ReservationTable,
};

#[component]
pub fn AdminReservations() -> Element {
    rsx! {
        Protected {
            access: Access::Role(Role::Admin),
            ReservationDesk {}
        }
    }
}

#[component]
fn ReservationDesk() -> Element {
    let api = use_api();
    let mut editing = use_signal(|| Option::<Reservation>::None);
    let mut deleting = use_signal(|| Option::<i64>::None);
    let mut error = use_signal(|| Option::<String>::None);

    let mut reservations = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move {
                if let Err(e) = api.authorize(Access::Role(Role::Admin)) {
                    return Err(e);
                }
                api.admin_reservations().await
            }
        }
    });

    let update_status = {
        let api = api.clone();
        move |(id, status): (i64, ReservationStatus)| {
            let api = api.clone();
            spawn(async move {
                match api.update_reservation_status(id, status).await {
                    Ok(_) => {
                        tracing::info!("Reservation {} set to {}", id, status);
                        reservations.restart();
                    }
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
            match api.delete_reservation(id).await {
                Ok(()) => reservations.restart(),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    rsx! {
        div {
            class: "page-header",
            h1 { "Reservations" }
        }

        if let Some(message) = error() {
            Banner {
                kind: BannerKind::Error,
                message: message,
                on_dismiss: move |_| error.set(None),
            }
        }

        match &*reservations.read() {
            Some(Ok(list)) => rsx! {
                ReservationTable {
                    reservations: list.clone(),
                    admin: true,
                    on_status: update_status.clone(),
                    on_edit: move |r| editing.set(Some(r)),
                    on_delete: move |id| deleting.set(Some(id)),
                }
            },
            Some(Err(e)) => rsx! {
                p { class: "error", "Could not load reservations: {e}" }
            },
            None => rsx! {
                p { class: "loading", "Loading reservations..." }
            },
        }

        if let Some(reservation) = editing() {
            Modal {
                on_close: move |_| editing.set(None),
                h2 { "Edit reservation #{reservation.id}" }
                ReservationForm {
                    editing: reservation.clone(),
                    on_saved: move |_| {
                        editing.set(None);
                        reservations.restart();
                    },
                }
            }
        }

        if deleting().is_some() {
            ConfirmDialog {
                message: "Delete this reservation permanently?",
                on_confirm: confirm_delete,
                on_cancel: move |_| deleting.set(None),
            }
        }
    }
}
