//! Data-entry forms. Each one validates locally through the gateway, disables
//! its submit button while a request is in flight, and shows field errors
//! inline and server errors in a dismissible banner.

mod login;
mod register;
mod reservation;
mod user;

pub use login::LoginForm;
pub use register::RegisterForm;
pub use reservation::ReservationForm;
pub use user::UserForm;

use api::{ApiError, ValidationErrors};
use dioxus::prelude::*;

/// Route a failed call into the form's two error slots.
pub(crate) fn report_error(
    err: ApiError,
    mut field_errors: Signal<ValidationErrors>,
    mut server_error: Signal<Option<String>>,
) {
    match err {
        ApiError::Validation(errors) => {
            tracing::warn!("Form rejected locally: {}", errors);
            field_errors.set(errors);
        }
        // The gateway is already navigating away.
        ApiError::Unauthorized { .. } => {}
        other => server_error.set(Some(other.to_string())),
    }
}

pub(crate) fn field_error(errors: &Signal<ValidationErrors>, field: &str) -> Option<String> {
    errors.read().get(field).map(str::to_string)
}
