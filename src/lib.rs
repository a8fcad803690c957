//! # jokehub
//!
//! A small joke, cipher and QR backend with cookie-session accounts,
//! built with Axum and SQLite.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Entities, joke value types, and trait seams
//! - **Application Layer** ([`application`]) - Business logic and service orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - Database and remote joke providers
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Joke fetching over an ordered chain of three remote APIs with a fixed
//!   local fallback list
//! - Caesar-cipher encoding with QR rendering of the result
//! - Account registration, login, logout and current-user queries over
//!   `HttpOnly` session cookies
//! - Static identity-provider listing and the post-OAuth frontend handoff
//!
//! ## Quick Start
//!
//! ```bash
//! # Set the required signing secret
//! export AUTH_SIGNING_SECRET="change-me"
//!
//! # Start the service (creates sqlite://jokehub.db on first run)
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AccountService, JokeService, QrService};
    pub use crate::domain::entities::{NewUser, Session, User};
    pub use crate::domain::joke::{FALLBACK_JOKES, Joke, JokeOrigin};
    pub use crate::domain::joke_provider::JokeProvider;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
