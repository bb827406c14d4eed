//! Web interface components of the Globe Scholars portal
//!
//! The shell lays the navigation menu over whichever page the router selects.
//! Page bodies are placeholders; only their routes matter here.

/// Navigation menu component
mod menu;
pub use menu::{Menu, MenuLink, activate, default_links};

/// Layout wrapping every routed page
mod shell;
pub use shell::Shell;

mod landing;
pub use landing::Landing;

mod register;
pub use register::Register;

mod login;
pub use login::Login;

mod about;
pub use about::About;

mod scholars;
pub use scholars::Scholars;

mod repository;
pub use repository::Repository;

/// Router fallback
mod not_found;
pub use not_found::NotFound;
