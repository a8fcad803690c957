//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod auth;
pub mod caesar;
pub mod health;
pub mod joke;
pub mod oauth;

pub use auth::{
    login_handler, logout_handler, providers_handler, signup_handler, user_info_handler,
};
pub use caesar::{caesar_handler, caesar_qr_handler};
pub use health::health_handler;
pub use joke::{joke_handler, joke_qr_handler};
pub use oauth::oauth_success_handler;
