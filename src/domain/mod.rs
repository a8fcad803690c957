//! Core domain types and trait seams.
//!
//! Contains entities, repository traits, and the joke value types and
//! provider trait. No I/O happens here; implementations live in
//! [`crate::infrastructure`].

pub mod entities;
pub mod joke;
pub mod joke_provider;
pub mod repositories;
