//! Business logic services for the application layer.

pub mod account_service;
pub mod caesar;
pub mod joke_service;
pub mod qr_service;

pub use account_service::AccountService;
pub use joke_service::JokeService;
pub use qr_service::QrService;
