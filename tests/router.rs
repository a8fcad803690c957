mod common;

use axum::body::{Body, to_bytes};
use axum::extract::ConnectInfo;
use axum::http::{Request, StatusCode, header};
use serde_json::json;
use sqlx::SqlitePool;
use std::net::SocketAddr;
use tower::ServiceExt;

use jokehub::domain::joke::FALLBACK_JOKES;
use jokehub::routes::app_router;

// The governor layers key on the peer IP, so every request carries one.
fn peer() -> ConnectInfo<SocketAddr> {
    ConnectInfo(SocketAddr::from(([127, 0, 0, 1], 4000)))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .extension(peer())
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .extension(peer())
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[sqlx::test]
async fn test_joke_route_with_and_without_trailing_slash(pool: SqlitePool) {
    let app = app_router(common::create_test_state(pool));

    for uri in ["/api/joke", "/api/joke/"] {
        let response = app.clone().oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = json_body(response).await;
        assert_eq!(json["source"], "fallback");
        assert!(FALLBACK_JOKES.contains(&json["joke"].as_str().unwrap()));
    }
}

#[sqlx::test]
async fn test_caesar_route_with_trailing_slash(pool: SqlitePool) {
    let app = app_router(common::create_test_state(pool));

    let response = app
        .oneshot(post_json(
            "/api/caesar/",
            json!({ "text": "Hello, World!", "shift": 3 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["encoded_text"], "Khoor, Zruog!");
}

#[sqlx::test]
async fn test_auth_routes_nested_under_api(pool: SqlitePool) {
    let app = app_router(common::create_test_state(pool));

    let providers = app
        .clone()
        .oneshot(get("/api/auth/providers/"))
        .await
        .unwrap();
    assert_eq!(providers.status(), StatusCode::OK);
    let json = json_body(providers).await;
    assert_eq!(json["providers"].as_array().unwrap().len(), 3);

    // The login handler's own validation answers, through the secure layer.
    let login = app
        .oneshot(post_json("/api/auth/login/", json!({})))
        .await
        .unwrap();
    assert_eq!(login.status(), StatusCode::BAD_REQUEST);
    let json = json_body(login).await;
    assert_eq!(json["error"], "Username and password are required");
}

#[sqlx::test]
async fn test_health_route_at_root(pool: SqlitePool) {
    let app = app_router(common::create_test_state(pool));

    // Empty provider chain reports degraded; the point is that the route
    // resolves through the composed router.
    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let json = json_body(response).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["database"]["status"], "ok");
}

#[sqlx::test]
async fn test_oauth_success_route_at_root(pool: SqlitePool) {
    let app = app_router(common::create_test_state(pool));

    let response = app.oneshot(get("/oauth/success/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let location = response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap();
    assert_eq!(
        location,
        format!("{}/?oauth_error=true", common::TEST_FRONTEND_ORIGIN)
    );
}

#[sqlx::test]
async fn test_unknown_route_is_404(pool: SqlitePool) {
    let app = app_router(common::create_test_state(pool));

    let response = app.oneshot(get("/api/nope")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
