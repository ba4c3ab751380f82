//! This crate contains all shared UI for the restaurant client.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod session;
pub use session::{
    use_api, use_config, use_session, ApiHandle, AppGateway, BrowserNavigator, LogoutButton,
    SessionProvider,
};

mod guard;
pub use guard::Protected;

mod navbar;
pub use navbar::Navbar;

mod modal;
pub use modal::{ConfirmDialog, Modal};

mod banner;
pub use banner::{Banner, BannerKind};

mod field;
pub use field::FormField;

pub mod forms;
pub use forms::{LoginForm, RegisterForm, ReservationForm, UserForm};

pub mod tables;
pub use tables::{Pagination, ReservationTable, UserTable};

mod activity_log;
pub use activity_log::ActivityLog;

mod markdown;
pub use markdown::{render_markdown, Markdown};

mod error_boundary;
pub use error_boundary::ShellBoundary;
