//! Page modules

pub mod config_error;
pub mod home;

pub use config_error::ConfigErrorPage;
pub use home::HomePage;
