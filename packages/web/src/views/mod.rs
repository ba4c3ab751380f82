mod info;
pub use info::{About, Home, Menu, NotFound};

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod reservations;
pub use reservations::{MyReservations, NewReservation};

mod admin_users;
pub use admin_users::{AdminUserDetail, AdminUsers};

mod admin_reservations;
pub use admin_reservations::AdminReservations;
