//! Wire records exchanged with the restaurant backend.

pub mod activity;
pub mod auth;
pub mod reservation;
pub mod user;

pub use activity::{ActivityType, UserActivity};
pub use auth::{AuthResponse, LoginRequest, RegisterRequest};
pub use reservation::{Reservation, ReservationArea, ReservationRequest, ReservationStatus};
pub use user::{AdminUser, Role, SessionUser, UserRequest};

use serde::{Deserialize, Serialize};

/// Success envelope wrapping every backend response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    pub data: T,
}
