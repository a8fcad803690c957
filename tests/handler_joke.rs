mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use httpmock::prelude::*;
use sqlx::SqlitePool;
use std::time::Duration;

use jokehub::api::handlers::{joke_handler, joke_qr_handler};
use jokehub::domain::joke::{FALLBACK_JOKES, ProviderError};
use jokehub::domain::joke_provider::JokeProvider;
use jokehub::infrastructure::jokes::{DadJokeProvider, JokeApiProvider, OfficialJokeProvider};

const TEST_TIMEOUT: Duration = Duration::from_secs(5);

fn joke_app(state: jokehub::state::AppState) -> TestServer {
    let app = Router::new()
        .route("/api/joke", get(joke_handler))
        .route("/api/joke-qr", get(joke_qr_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

#[sqlx::test]
async fn test_joke_fallback_without_providers(pool: SqlitePool) {
    let server = joke_app(common::create_test_state(pool));

    let response = server.get("/api/joke").await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["source"], "fallback");
    let joke = json["joke"].as_str().unwrap();
    assert!(FALLBACK_JOKES.contains(&joke));
}

#[sqlx::test]
async fn test_joke_from_online_provider(pool: SqlitePool) {
    let mock_server = MockServer::start();
    let joke_mock = mock_server.mock(|when, then| {
        when.method(GET).path("/joke");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "type": "single",
                "joke": "Why did the crab never share? Because he was shellfish."
            }));
    });

    let client = reqwest::Client::new();
    let providers: Vec<Box<dyn JokeProvider>> = vec![Box::new(JokeApiProvider::new(
        client,
        mock_server.url("/joke"),
        TEST_TIMEOUT,
    ))];
    let server = joke_app(common::create_state_with_providers(pool, providers));

    let response = server.get("/api/joke").await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["source"], "online_api");
    assert_eq!(
        json["joke"],
        "Why did the crab never share? Because he was shellfish."
    );
    joke_mock.assert();
}

#[sqlx::test]
async fn test_joke_falls_through_to_second_provider(pool: SqlitePool) {
    let mock_server = MockServer::start();
    let failing = mock_server.mock(|when, then| {
        when.method(GET).path("/primary");
        then.status(500);
    });
    let twopart = mock_server.mock(|when, then| {
        when.method(GET).path("/secondary");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "setup": "Why do programmers prefer dark mode?",
                "punchline": "Because light attracts bugs."
            }));
    });

    let client = reqwest::Client::new();
    let providers: Vec<Box<dyn JokeProvider>> = vec![
        Box::new(JokeApiProvider::new(
            client.clone(),
            mock_server.url("/primary"),
            TEST_TIMEOUT,
        )),
        Box::new(OfficialJokeProvider::new(
            client,
            mock_server.url("/secondary"),
            TEST_TIMEOUT,
        )),
    ];
    let server = joke_app(common::create_state_with_providers(pool, providers));

    let response = server.get("/api/joke").await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["source"], "online_api");
    assert_eq!(
        json["joke"],
        "Why do programmers prefer dark mode? Because light attracts bugs."
    );
    failing.assert();
    twopart.assert();
}

#[sqlx::test]
async fn test_joke_fallback_when_all_providers_fail(pool: SqlitePool) {
    let mock_server = MockServer::start();
    mock_server.mock(|when, then| {
        when.method(GET);
        then.status(503);
    });

    let client = reqwest::Client::new();
    let providers: Vec<Box<dyn JokeProvider>> = vec![
        Box::new(JokeApiProvider::new(
            client.clone(),
            mock_server.url("/a"),
            TEST_TIMEOUT,
        )),
        Box::new(OfficialJokeProvider::new(
            client.clone(),
            mock_server.url("/b"),
            TEST_TIMEOUT,
        )),
        Box::new(DadJokeProvider::new(
            client,
            mock_server.url("/c"),
            TEST_TIMEOUT,
        )),
    ];
    let server = joke_app(common::create_state_with_providers(pool, providers));

    let response = server.get("/api/joke").await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["source"], "fallback");
    assert!(FALLBACK_JOKES.contains(&json["joke"].as_str().unwrap()));
}

#[sqlx::test]
async fn test_dad_joke_provider_sends_json_accept_header(pool: SqlitePool) {
    let mock_server = MockServer::start();
    let dad_mock = mock_server.mock(|when, then| {
        when.method(GET)
            .path("/dad")
            .header("Accept", "application/json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "id": "abc",
                "joke": "I used to hate facial hair, but then it grew on me.",
                "status": 200
            }));
    });

    let providers: Vec<Box<dyn JokeProvider>> = vec![Box::new(DadJokeProvider::new(
        reqwest::Client::new(),
        mock_server.url("/dad"),
        TEST_TIMEOUT,
    ))];
    let server = joke_app(common::create_state_with_providers(pool, providers));

    let response = server.get("/api/joke").await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["source"], "online_api");
    assert_eq!(
        json["joke"],
        "I used to hate facial hair, but then it grew on me."
    );
    dad_mock.assert();
}

#[tokio::test]
async fn test_slow_provider_classified_as_timeout() {
    let mock_server = MockServer::start();
    mock_server.mock(|when, then| {
        when.method(GET).path("/slow");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({ "type": "single", "joke": "Too slow." }))
            .delay(Duration::from_millis(500));
    });

    let provider = JokeApiProvider::new(
        reqwest::Client::new(),
        mock_server.url("/slow"),
        Duration::from_millis(50),
    );

    let err = provider.try_fetch().await.unwrap_err();
    assert!(matches!(err, ProviderError::Timeout));
}

#[sqlx::test]
async fn test_provider_timeout_falls_back(pool: SqlitePool) {
    let mock_server = MockServer::start();
    let slow = mock_server.mock(|when, then| {
        when.method(GET).path("/slow");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({ "type": "single", "joke": "Too slow." }))
            .delay(Duration::from_millis(500));
    });

    let providers: Vec<Box<dyn JokeProvider>> = vec![Box::new(JokeApiProvider::new(
        reqwest::Client::new(),
        mock_server.url("/slow"),
        Duration::from_millis(50),
    ))];
    let server = joke_app(common::create_state_with_providers(pool, providers));

    let response = server.get("/api/joke").await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["source"], "fallback");
    assert!(FALLBACK_JOKES.contains(&json["joke"].as_str().unwrap()));
    slow.assert();
}

#[sqlx::test]
async fn test_joke_qr_returns_png_image(pool: SqlitePool) {
    let server = joke_app(common::create_test_state(pool));

    let response = server.get("/api/joke-qr").await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["source"], "fallback");
    assert!(FALLBACK_JOKES.contains(&json["joke"].as_str().unwrap()));

    let bytes = STANDARD.decode(json["qr_image"].as_str().unwrap()).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}
