//! Post-OAuth handoff back to the frontend.

use axum::{
    extract::State,
    http::HeaderMap,
    response::Redirect,
};

use super::auth::session_token;
use crate::state::AppState;

/// Hands a completed identity-provider login back to the frontend.
///
/// # Endpoint
///
/// `GET /oauth/success/`
///
/// The identity framework redirects here after its callback has
/// established a session. With a valid session cookie the browser is sent
/// to `{frontend_origin}/?oauth_success=true&username=...`; otherwise to
/// `{frontend_origin}/?oauth_error=true`.
pub async fn oauth_success_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Redirect {
    let user = match session_token(&headers) {
        Some(token) => state
            .account_service
            .current_user(&token)
            .await
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "session lookup failed");
                None
            }),
        None => None,
    };

    match user {
        Some(user) => Redirect::to(&format!(
            "{}/?oauth_success=true&username={}",
            state.frontend_origin, user.username
        )),
        None => Redirect::to(&format!("{}/?oauth_error=true", state.frontend_origin)),
    }
}
