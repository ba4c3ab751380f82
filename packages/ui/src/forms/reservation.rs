use api::validation::check_reservation_details;
use api::{Reservation, ReservationArea, ReservationRequest, ValidationErrors};
use chrono::{NaiveDate, NaiveTime};
use dioxus::prelude::*;

use super::{field_error, report_error};
use crate::banner::{Banner, BannerKind};
use crate::field::FormField;
use crate::session::{use_api, use_session};

/// Raw form inputs before they are parsed into a [`ReservationRequest`].
#[derive(Clone, Debug, Default, PartialEq)]
struct Draft {
    name: String,
    email: String,
    phone: String,
    date: String,
    time: String,
    people: String,
    area: ReservationArea,
    special_requests: String,
}

impl Draft {
    fn from_reservation(r: &Reservation) -> Self {
        Self {
            name: r.name.clone(),
            email: r.email.clone(),
            phone: r.phone.clone(),
            date: r.reservation_date.format("%Y-%m-%d").to_string(),
            time: r.reservation_time.format("%H:%M").to_string(),
            people: r.number_of_people.to_string(),
            area: r.reservation_area,
            special_requests: r.special_requests.clone().unwrap_or_default(),
        }
    }

    fn parse(&self) -> Result<ReservationRequest, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| errors.add("reservationDate", "please choose a date"))
            .ok();
        let time = NaiveTime::parse_from_str(self.time.trim(), "%H:%M")
            .map_err(|_| errors.add("reservationTime", "please choose a time"))
            .ok();
        let people = self
            .people
            .trim()
            .parse::<u32>()
            .map_err(|_| errors.add("numberOfPeople", "party size must be a number"))
            .ok();

        let notes = self.special_requests.trim();
        let special_requests = (!notes.is_empty()).then(|| notes.to_string());

        match (date, time, people) {
            (Some(reservation_date), Some(reservation_time), Some(number_of_people)) => {
                Ok(ReservationRequest {
                    name: self.name.trim().to_string(),
                    email: self.email.trim().to_string(),
                    phone: self.phone.trim().to_string(),
                    reservation_date,
                    reservation_time,
                    number_of_people,
                    reservation_area: self.area,
                    special_requests,
                })
            }
            _ => {
                check_reservation_details(
                    &mut errors,
                    &self.name,
                    &self.email,
                    &self.phone,
                    special_requests.as_deref(),
                );
                Err(errors)
            }
        }
    }
}

/// Booking form. With `editing` set it updates that reservation (admin),
/// otherwise it creates a new one.
#[component]
pub fn ReservationForm(
    #[props(default)] editing: Option<Reservation>,
    on_saved: EventHandler<Reservation>,
) -> Element {
    let api = use_api();
    let session = use_session();
    let editing_id = editing.as_ref().map(|r| r.id);

    let mut draft = use_signal(move || match &editing {
        Some(r) => Draft::from_reservation(r),
        None => Draft {
            email: session()
                .user
                .map(|u| u.email)
                .unwrap_or_default(),
            people: "2".to_string(),
            ..Draft::default()
        },
    });
    let mut field_errors = use_signal(ValidationErrors::new);
    let mut server_error = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        spawn(async move {
            field_errors.set(ValidationErrors::new());
            server_error.set(None);
            success.set(None);

            let request = match draft().parse() {
                Ok(request) => request,
                Err(errors) => {
                    field_errors.set(errors);
                    return;
                }
            };

            loading.set(true);
            let result = match editing_id {
                Some(id) => api.update_reservation(id, &request).await,
                None => api.create_reservation(&request).await,
            };
            loading.set(false);

            match result {
                Ok(saved) => {
                    tracing::info!("Reservation {} saved", saved.id);
                    if editing_id.is_none() {
                        success.set(Some(format!(
                            "Thank you! Your table for {} on {} at {} is {}.",
                            saved.number_of_people,
                            saved.reservation_date.format("%d/%m/%Y"),
                            saved.reservation_time.format("%H:%M"),
                            saved.status.as_str().to_lowercase(),
                        )));
                        draft.set(Draft {
                            email: request.email,
                            people: "2".to_string(),
                            ..Draft::default()
                        });
                    }
                    on_saved.call(saved);
                }
                Err(e) => report_error(e, field_errors, server_error),
            }
        });
    };

    let d = draft();
    let max_people = api::validation::MAX_PARTY_SIZE.to_string();
    let max_notes = api::validation::MAX_SPECIAL_REQUESTS_LEN.to_string();

    rsx! {
        form {
            class: "form reservation-form",
            onsubmit: handle_submit,

            if let Some(err) = server_error() {
                Banner {
                    kind: BannerKind::Error,
                    message: err,
                    on_dismiss: move |_| server_error.set(None),
                }
            }
            if let Some(msg) = success() {
                Banner {
                    kind: BannerKind::Success,
                    message: msg,
                    on_dismiss: move |_| success.set(None),
                }
            }

            FormField {
                id: "reservation-name",
                label: "Name",
                error: field_error(&field_errors, "name"),
                input {
                    id: "reservation-name",
                    r#type: "text",
                    value: d.name.clone(),
                    oninput: move |evt: FormEvent| draft.write().name = evt.value(),
                }
            }

            div {
                class: "form-row",
                FormField {
                    id: "reservation-email",
                    label: "Email",
                    error: field_error(&field_errors, "email"),
                    input {
                        id: "reservation-email",
                        r#type: "email",
                        value: d.email.clone(),
                        oninput: move |evt: FormEvent| draft.write().email = evt.value(),
                    }
                }
                FormField {
                    id: "reservation-phone",
                    label: "Phone",
                    error: field_error(&field_errors, "phone"),
                    input {
                        id: "reservation-phone",
                        r#type: "tel",
                        value: d.phone.clone(),
                        oninput: move |evt: FormEvent| draft.write().phone = evt.value(),
                    }
                }
            }

            div {
                class: "form-row",
                FormField {
                    id: "reservation-date",
                    label: "Date",
                    error: field_error(&field_errors, "reservationDate"),
                    input {
                        id: "reservation-date",
                        r#type: "date",
                        value: d.date.clone(),
                        oninput: move |evt: FormEvent| draft.write().date = evt.value(),
                    }
                }
                FormField {
                    id: "reservation-time",
                    label: "Time",
                    error: field_error(&field_errors, "reservationTime"),
                    input {
                        id: "reservation-time",
                        r#type: "time",
                        value: d.time.clone(),
                        oninput: move |evt: FormEvent| draft.write().time = evt.value(),
                    }
                }
                FormField {
                    id: "reservation-people",
                    label: "Guests",
                    error: field_error(&field_errors, "numberOfPeople"),
                    input {
                        id: "reservation-people",
                        r#type: "number",
                        min: "1",
                        max: max_people,
                        value: d.people.clone(),
                        oninput: move |evt: FormEvent| draft.write().people = evt.value(),
                    }
                }
            }

            FormField {
                id: "reservation-area",
                label: "Area",
                select {
                    id: "reservation-area",
                    value: d.area.as_str(),
                    onchange: move |evt: FormEvent| {
                        if let Some(area) = ReservationArea::parse(&evt.value()) {
                            draft.write().area = area;
                        }
                    },
                    option { value: "INDOOR", "Indoor" }
                    option { value: "OUTDOOR", "Terrace" }
                }
            }

            FormField {
                id: "reservation-notes",
                label: "Special requests",
                error: field_error(&field_errors, "specialRequests"),
                textarea {
                    id: "reservation-notes",
                    rows: "3",
                    maxlength: max_notes,
                    value: d.special_requests.clone(),
                    oninput: move |evt: FormEvent| draft.write().special_requests = evt.value(),
                }
            }

            button {
                class: "btn btn--primary btn--block",
                r#type: "submit",
                disabled: loading(),
                if loading() {
                    "Saving..."
                } else if editing_id.is_some() {
                    "Save changes"
                } else {
                    "Book table"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_parses_inputs() {
        let draft = Draft {
            name: " Grace ".into(),
            email: "grace@example.com".into(),
            phone: "600123456".into(),
            date: "2030-06-20".into(),
            time: "21:15".into(),
            people: "4".into(),
            area: ReservationArea::Outdoor,
            special_requests: "   ".into(),
        };
        let request = draft.parse().unwrap();
        assert_eq!(request.name, "Grace");
        assert_eq!(request.number_of_people, 4);
        assert!(request.special_requests.is_none());
    }

    #[test]
    fn test_draft_reports_unparseable_fields() {
        let draft = Draft {
            name: "Grace".into(),
            email: "grace@example.com".into(),
            phone: "600123456".into(),
            people: "lots".into(),
            ..Draft::default()
        };
        let errors = draft.parse().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get("numberOfPeople"), Some("party size must be a number"));
    }

    #[test]
    fn test_draft_reports_contact_errors_with_parse_errors() {
        let draft = Draft {
            email: "not-an-email".into(),
            date: "2030-06-20".into(),
            time: "21:15".into(),
            people: "lots".into(),
            ..Draft::default()
        };
        let errors = draft.parse().unwrap_err();
        assert_eq!(errors.get("numberOfPeople"), Some("party size must be a number"));
        assert_eq!(errors.get("name"), Some("name is required"));
        assert_eq!(errors.get("email"), Some("please enter a valid email address"));
        assert_eq!(errors.get("phone"), Some("phone is required"));
        assert_eq!(errors.len(), 4);
    }
}
