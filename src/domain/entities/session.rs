//! Cookie session entity.

use chrono::{DateTime, Utc};

/// A login session backing the `session_token` cookie.
///
/// Only the HMAC hash of the token is stored; the raw token lives in the
/// client cookie and cannot be recovered from this row.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Session {
    pub id: i64,
    pub user_id: i64,
    pub token_hash: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}
