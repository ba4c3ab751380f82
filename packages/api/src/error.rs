use thiserror::Error;

use crate::validation::ValidationErrors;

/// Errors surfaced by the API gateway.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Input rejected locally; no request was sent.
    #[error("{0}")]
    Validation(ValidationErrors),
    /// The stored token was already expired; no request was sent.
    #[error("Your session has expired. Please log in again.")]
    SessionExpired,
    /// The backend answered 401 or 403. The session has been cleared.
    #[error("Not authorized (HTTP {status})")]
    Unauthorized { status: u16 },
    /// Any other non-2xx response.
    #[error("{message}")]
    Server { status: u16, message: String },
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),
    /// A 2xx response whose body did not match the expected schema.
    #[error("Unexpected response: {0}")]
    Decode(String),
    /// The route guard refused the call for the current session; no request was sent.
    #[error("You do not have access to this page.")]
    NotPermitted,
    /// The backend accepted the credentials but the session could not be stored.
    #[error("Could not start your session. Please try again.")]
    SessionNotStarted,
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::Validation(errors)
    }
}
