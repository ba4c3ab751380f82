//! # API crate: session, gateway and client-side rules for the restaurant client
//!
//! Everything the web client does that is not rendering lives here, so it can be
//! tested on the host without a browser.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`claims`] | Unverified JWT payload decoding and the "expired unless proven otherwise" policy |
//! | [`session`] | [`SessionStore`]: token + `{email, role}` in memory and in durable storage |
//! | [`gateway`] | [`Gateway`]: bearer header, local expiry rejection, 401/403 hard reset, error mapping |
//! | [`transport`] | [`Transport`] seam and the `reqwest` implementation |
//! | [`guard`] | Route guard predicate over [`SessionState`] |
//! | [`validation`] | Format checks for login, registration, reservation and admin-user forms |
//! | [`listing`] | Search / filter / sort / paginate over already-fetched rows |
//! | [`export`] | CSV and JSON downloads |
//! | [`models`] | Wire records (`Reservation`, `AdminUser`, `UserActivity`, ...) |
//!
//! ## Endpoints
//!
//! The typed REST calls are inherent methods on [`Gateway`]:
//!
//! - **Auth**: `login`, `register`, `logout`
//! - **Reservations**: `create_reservation`, `my_reservations`, `cancel_reservation`,
//!   `admin_reservations`, `update_reservation`, `update_reservation_status`, `delete_reservation`
//! - **Users**: `admin_users`, `admin_user`, `create_user`, `update_user`,
//!   `set_user_enabled`, `delete_user`, `user_activities`

pub mod claims;
pub mod clock;
mod endpoints;
pub mod error;
pub mod export;
pub mod gateway;
pub mod guard;
pub mod listing;
pub mod models;
pub mod session;
pub mod transport;
pub mod validation;

pub use error::ApiError;
pub use gateway::{Gateway, Navigator, SharedSession};
pub use guard::{Access, GuardDecision};
pub use listing::{ListQuery, Page, SortDir};
pub use models::{
    ActivityType, AdminUser, AuthResponse, LoginRequest, RegisterRequest, Reservation,
    ReservationArea, ReservationRequest, ReservationStatus, Role, SessionUser, UserActivity,
    UserRequest,
};
pub use session::{SessionState, SessionStore};
pub use transport::{ReqwestTransport, Transport};
pub use validation::ValidationErrors;
