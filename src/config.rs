//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Required Variables
//!
//! - `AUTH_SIGNING_SECRET` - HMAC key for password and session-token hashing
//!
//! ## Optional Variables
//!
//! - `DATABASE_URL` - SQLite database (default: `sqlite://jokehub.db`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:8000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `FRONTEND_ORIGIN` - Origin the OAuth handoff redirects to
//!   (default: `http://localhost:5173`)
//! - `SESSION_TTL_SECONDS` - Session cookie lifetime (default: 14 days)
//! - `JOKE_TIMEOUT_SECONDS` - Per-provider timeout for remote joke
//!   lookups (default: 5, max: 60)

use anyhow::{Context, Result};
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Origin the `/oauth/success` handoff redirects the browser to.
    pub frontend_origin: String,
    /// HMAC signing secret for password and session-token hashing.
    /// Loaded from `AUTH_SIGNING_SECRET`. Must be non-empty.
    pub auth_signing_secret: String,
    /// Session lifetime in seconds. Expired sessions resolve to no user.
    pub session_ttl_seconds: u64,
    /// Timeout applied to each remote joke lookup, in seconds.
    pub joke_timeout_seconds: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `AUTH_SIGNING_SECRET` is missing.
    pub fn from_env() -> Result<Self> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://jokehub.db".to_string());

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let frontend_origin =
            env::var("FRONTEND_ORIGIN").unwrap_or_else(|_| "http://localhost:5173".to_string());

        let auth_signing_secret =
            env::var("AUTH_SIGNING_SECRET").context("AUTH_SIGNING_SECRET must be set")?;

        let session_ttl_seconds = env::var("SESSION_TTL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(14 * 24 * 3600);

        let joke_timeout_seconds = env::var("JOKE_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        Ok(Self {
            database_url,
            listen_addr,
            log_level,
            log_format,
            frontend_origin,
            auth_signing_secret,
            session_ttl_seconds,
            joke_timeout_seconds,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `database_url` is not a SQLite URL
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `auth_signing_secret` is empty
    /// - `session_ttl_seconds` is zero
    /// - `joke_timeout_seconds` is outside [1, 60]
    pub fn validate(&self) -> Result<()> {
        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.frontend_origin.is_empty() || self.frontend_origin.ends_with('/') {
            anyhow::bail!(
                "FRONTEND_ORIGIN must be a non-empty origin without trailing slash, got '{}'",
                self.frontend_origin
            );
        }

        if self.auth_signing_secret.is_empty() {
            anyhow::bail!("AUTH_SIGNING_SECRET must not be empty");
        }

        if self.session_ttl_seconds == 0 {
            anyhow::bail!("SESSION_TTL_SECONDS must be greater than 0");
        }

        if self.joke_timeout_seconds == 0 || self.joke_timeout_seconds > 60 {
            anyhow::bail!(
                "JOKE_TIMEOUT_SECONDS must be between 1 and 60, got {}",
                self.joke_timeout_seconds
            );
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Database: {}", self.database_url);
        tracing::info!("  Frontend origin: {}", self.frontend_origin);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Session TTL: {}s", self.session_ttl_seconds);
        tracing::info!("  Joke provider timeout: {}s", self.joke_timeout_seconds);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
