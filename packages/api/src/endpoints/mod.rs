//! Typed wrappers over the backend's REST surface, one module per resource.
//! Each is an `impl` block on [`crate::Gateway`].

mod auth;
mod reservations;
mod users;
