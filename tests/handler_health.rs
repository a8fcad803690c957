mod common;

use axum::{Router, http::StatusCode, routing::get};
use axum_test::TestServer;
use sqlx::SqlitePool;
use std::time::Duration;

use jokehub::api::handlers::health_handler;
use jokehub::domain::joke_provider::JokeProvider;
use jokehub::infrastructure::jokes::JokeApiProvider;

#[sqlx::test]
async fn test_health_endpoint_success(pool: SqlitePool) {
    let providers: Vec<Box<dyn JokeProvider>> = vec![Box::new(JokeApiProvider::new(
        reqwest::Client::new(),
        JokeApiProvider::DEFAULT_URL,
        Duration::from_secs(5),
    ))];
    let state = common::create_state_with_providers(pool, providers);
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "ok");
    assert_eq!(json["checks"]["joke_providers"]["status"], "ok");
}

#[sqlx::test]
async fn test_health_degraded_without_providers(pool: SqlitePool) {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["joke_providers"]["status"], "error");
}

#[sqlx::test]
async fn test_health_endpoint_structure(pool: SqlitePool) {
    let providers: Vec<Box<dyn JokeProvider>> = vec![Box::new(JokeApiProvider::new(
        reqwest::Client::new(),
        JokeApiProvider::DEFAULT_URL,
        Duration::from_secs(5),
    ))];
    let state = common::create_state_with_providers(pool, providers);
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    let json = response.json::<serde_json::Value>();

    assert!(json.get("status").is_some());
    assert!(json.get("version").is_some());
    assert!(json.get("checks").is_some());
    assert!(json["checks"].get("database").is_some());
    assert!(json["checks"].get("joke_providers").is_some());
}
