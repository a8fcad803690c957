//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization; signup shape
//! checks use validator.

pub mod auth;
pub mod caesar;
pub mod health;
pub mod joke;
