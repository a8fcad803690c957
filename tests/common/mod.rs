#![allow(dead_code)]

use sqlx::SqlitePool;
use std::sync::Arc;

use jokehub::application::services::{AccountService, JokeService, QrService};
use jokehub::domain::joke_provider::JokeProvider;
use jokehub::infrastructure::persistence::{SqliteSessionRepository, SqliteUserRepository};
use jokehub::state::AppState;

pub const TEST_SECRET: &str = "test-signing-secret";
pub const TEST_FRONTEND_ORIGIN: &str = "http://localhost:5173";
pub const TEST_SESSION_TTL: u64 = 3600;

/// State with an empty provider chain; joke endpoints serve fallbacks.
pub fn create_test_state(pool: SqlitePool) -> AppState {
    create_state_with_providers(pool, Vec::new())
}

pub fn create_state_with_providers(
    pool: SqlitePool,
    providers: Vec<Box<dyn JokeProvider>>,
) -> AppState {
    let pool = Arc::new(pool);

    let user_repo = Arc::new(SqliteUserRepository::new(pool.clone()));
    let session_repo = Arc::new(SqliteSessionRepository::new(pool));

    AppState {
        joke_service: Arc::new(JokeService::new(providers)),
        qr_service: Arc::new(QrService::new()),
        account_service: Arc::new(AccountService::new(
            user_repo,
            session_repo,
            TEST_SECRET.to_string(),
            TEST_SESSION_TTL,
        )),
        frontend_origin: TEST_FRONTEND_ORIGIN.to_string(),
    }
}

/// Registers an account directly through the service layer.
pub async fn create_test_user(state: &AppState, username: &str, email: &str, password: &str) {
    state
        .account_service
        .register(username, email, password)
        .await
        .unwrap();
}

/// Pulls the raw session token out of a `Set-Cookie` header value.
pub fn token_from_set_cookie(set_cookie: &str) -> String {
    set_cookie
        .split(';')
        .next()
        .and_then(|pair| pair.strip_prefix("session_token="))
        .unwrap()
        .to_string()
}
