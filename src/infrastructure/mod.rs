//! Infrastructure layer: database access and outbound HTTP integrations.

pub mod jokes;
pub mod persistence;
