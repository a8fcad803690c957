//! Account registration, authentication and session lifecycle.

use chrono::{Duration, Utc};
use hmac::{Hmac, Mac};
use rand::Rng;
use sha2::Sha256;
use std::sync::Arc;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::{SessionRepository, UserRepository};
use crate::error::AppError;

type HmacSha256 = Hmac<Sha256>;

const TOKEN_LEN: usize = 48;
const SALT_LEN: usize = 16;
const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Service owning accounts and cookie sessions.
///
/// Passwords are stored as `salt$mac` where the MAC is HMAC-SHA256 keyed by
/// `signing_secret` over `salt || password`; session tokens are stored as
/// their bare HMAC. An attacker with read-only access to the database cannot
/// verify passwords or forge sessions without the server-side secret.
pub struct AccountService {
    users: Arc<dyn UserRepository>,
    sessions: Arc<dyn SessionRepository>,
    signing_secret: String,
    session_ttl_seconds: u64,
}

impl AccountService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        sessions: Arc<dyn SessionRepository>,
        signing_secret: String,
        session_ttl_seconds: u64,
    ) -> Self {
        Self {
            users,
            sessions,
            signing_secret,
            session_ttl_seconds,
        }
    }

    pub fn session_ttl_seconds(&self) -> u64 {
        self.session_ttl_seconds
    }

    /// Computes a 64-character lowercase hex HMAC-SHA256 MAC.
    fn mac(&self, data: &[u8]) -> String {
        let mut mac = HmacSha256::new_from_slice(self.signing_secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(data);
        hex::encode(mac.finalize().into_bytes())
    }

    /// Hashes a password with a fresh random salt, returning `salt$mac`.
    pub fn hash_password(&self, password: &str) -> String {
        let salt = random_string(SALT_LEN);
        let mac = self.mac(format!("{salt}{password}").as_bytes());
        format!("{salt}${mac}")
    }

    /// Recomputes the MAC from the stored `salt$mac` string and compares.
    fn verify_password(&self, password: &str, stored: &str) -> bool {
        let Some((salt, mac)) = stored.split_once('$') else {
            return false;
        };
        self.mac(format!("{salt}{password}").as_bytes()) == mac
    }

    fn hash_token(&self, token: &str) -> String {
        self.mac(token.as_bytes())
    }

    /// Creates a new account.
    ///
    /// Uniqueness of username and email is checked up front; a lost race
    /// surfaces through the unique constraint and maps to the same 400.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for duplicate username or email,
    /// [`AppError::Internal`] on database errors.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<User, AppError> {
        if self.users.find_by_username(username).await?.is_some() {
            return Err(AppError::bad_request("Username already exists"));
        }
        if self.users.find_by_email(email).await?.is_some() {
            return Err(AppError::bad_request("Email already exists"));
        }

        let new_user = NewUser {
            username: username.to_string(),
            email: email.to_string(),
            password_hash: self.hash_password(password),
        };

        match self.users.create(new_user).await {
            Ok(user) => Ok(user),
            Err(AppError::Conflict { .. }) => {
                Err(AppError::bad_request("Username or email already exists"))
            }
            Err(e) => Err(e),
        }
    }

    /// Checks credentials. Returns `None` for an unknown username or a wrong
    /// password; the caller cannot tell which.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, AppError> {
        let Some(user) = self.users.find_by_username(username).await? else {
            return Ok(None);
        };

        if self.verify_password(password, &user.password_hash) {
            Ok(Some(user))
        } else {
            Ok(None)
        }
    }

    /// Opens a session for `user_id` and returns the raw cookie token.
    ///
    /// The raw token is returned exactly once; only its hash is persisted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_session(&self, user_id: i64) -> Result<String, AppError> {
        let token = random_string(TOKEN_LEN);
        let expires_at = Utc::now() + Duration::seconds(self.session_ttl_seconds as i64);

        self.sessions
            .create(user_id, &self.hash_token(&token), expires_at)
            .await?;

        Ok(token)
    }

    /// Destroys the session behind a raw token. Unknown tokens are a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn destroy_session(&self, token: &str) -> Result<(), AppError> {
        self.sessions
            .delete_by_token_hash(&self.hash_token(token))
            .await
    }

    /// Resolves a raw session token to its user. Expired or unknown tokens
    /// resolve to `None`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn current_user(&self, token: &str) -> Result<Option<User>, AppError> {
        let Some(session) = self
            .sessions
            .find_by_token_hash(&self.hash_token(token))
            .await?
        else {
            return Ok(None);
        };

        if session.is_expired(Utc::now()) {
            return Ok(None);
        }

        self.users.find_by_id(session.user_id).await
    }

    /// Total number of accounts, for health reporting.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn user_count(&self) -> Result<i64, AppError> {
        self.users.count().await
    }
}

/// Random alphanumeric string; ~5.95 bits of entropy per character.
fn random_string(len: usize) -> String {
    let mut rng = rand::rng();

    (0..len)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
