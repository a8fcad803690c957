//! HTTP server initialization and runtime setup.
//!
//! Handles database setup, service wiring, and Axum server lifecycle.

use crate::application::services::{AccountService, JokeService, QrService};
use crate::config::Config;
use crate::domain::joke_provider::JokeProvider;
use crate::infrastructure::jokes::{DadJokeProvider, JokeApiProvider, OfficialJokeProvider};
use crate::infrastructure::persistence::{SqliteSessionRepository, SqliteUserRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite connection pool (creating the database file if needed)
/// - Migrations
/// - Joke provider chain
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database setup fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);
    let pool = SqlitePool::connect_with(options).await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;

    let state = build_state(pool, &config);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .await?;

    Ok(())
}

/// Wires repositories, the provider chain and services into [`AppState`].
fn build_state(pool: SqlitePool, config: &Config) -> AppState {
    let pool = Arc::new(pool);
    let user_repository = Arc::new(SqliteUserRepository::new(pool.clone()));
    let session_repository = Arc::new(SqliteSessionRepository::new(pool));

    let account_service = Arc::new(AccountService::new(
        user_repository,
        session_repository,
        config.auth_signing_secret.clone(),
        config.session_ttl_seconds,
    ));

    let client = reqwest::Client::new();
    let timeout = Duration::from_secs(config.joke_timeout_seconds);
    let providers: Vec<Box<dyn JokeProvider>> = vec![
        Box::new(JokeApiProvider::new(
            client.clone(),
            JokeApiProvider::DEFAULT_URL,
            timeout,
        )),
        Box::new(OfficialJokeProvider::new(
            client.clone(),
            OfficialJokeProvider::DEFAULT_URL,
            timeout,
        )),
        Box::new(DadJokeProvider::new(
            client,
            DadJokeProvider::DEFAULT_URL,
            timeout,
        )),
    ];

    AppState {
        joke_service: Arc::new(JokeService::new(providers)),
        qr_service: Arc::new(QrService::new()),
        account_service,
        frontend_origin: config.frontend_origin.clone(),
    }
}
