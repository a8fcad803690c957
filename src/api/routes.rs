//! API route configuration.

use crate::api::handlers::{
    caesar_handler, caesar_qr_handler, joke_handler, joke_qr_handler, login_handler,
    logout_handler, providers_handler, signup_handler, user_info_handler,
};
use crate::api::middleware::rate_limit;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes, nested under `/api` by the top-level router.
///
/// # Endpoints
///
/// - `GET  /joke`            - Random joke with provenance
/// - `GET  /joke-qr`         - Random joke plus QR image
/// - `POST /caesar`          - Caesar-encode text
/// - `POST /caesar-qr`       - Caesar-encode text plus QR image
/// - `POST /auth/login`      - Open a session
/// - `POST /auth/signup`     - Create an account
/// - `POST /auth/logout`     - Destroy the session
/// - `GET  /auth/user`       - Current user info
/// - `GET  /auth/providers`  - Delegated identity providers
pub fn api_routes() -> Router<AppState> {
    let public = Router::new()
        .route("/joke", get(joke_handler))
        .route("/joke-qr", get(joke_qr_handler))
        .route("/caesar", post(caesar_handler))
        .route("/caesar-qr", post(caesar_qr_handler))
        .layer(rate_limit::layer());

    let auth = Router::new()
        .route("/login", post(login_handler))
        .route("/signup", post(signup_handler))
        .route("/logout", post(logout_handler))
        .route("/user", get(user_info_handler))
        .route("/providers", get(providers_handler))
        .layer(rate_limit::secure_layer());

    Router::new().merge(public).nest("/auth", auth)
}
