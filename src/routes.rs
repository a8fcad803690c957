//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /health`          - Health check: DB, provider chain (public)
//! - `GET /oauth/success`   - Post-OAuth handoff redirect
//! - `/api/*`               - JSON API (jokes, cipher, accounts)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket, stricter on account routes
//! - **Path normalization** - Trailing slash handling, so `/api/joke/`
//!   and `/api/joke` resolve to the same handler

use crate::api;
use crate::api::handlers::{health_handler, oauth_success_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/health", get(health_handler))
        .route("/oauth/success", get(oauth_success_handler))
        .nest("/api", api::routes::api_routes())
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
