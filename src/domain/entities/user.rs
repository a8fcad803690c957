//! User account entity.

use chrono::{DateTime, Utc};

/// A registered account.
///
/// `password_hash` is a `salt$mac` string and never leaves the backend;
/// response payloads are shaped by the API DTOs instead of serializing this
/// struct directly.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
}

/// Data required to create an account. Names default to empty strings.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}
