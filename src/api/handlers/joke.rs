//! Handlers for the joke endpoints.

use axum::{Json, extract::State};

use crate::api::dto::joke::{JokeQrResponse, JokeResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Returns a random joke.
///
/// # Endpoint
///
/// `GET /api/joke/`
///
/// # Response
///
/// ```json
/// {
///   "joke": "Why don't programmers like nature? It has too many bugs.",
///   "source": "online_api"
/// }
/// ```
///
/// Never fails: exhausted remote sources fall back to a built-in list and
/// `source` becomes `"fallback"`.
pub async fn joke_handler(State(state): State<AppState>) -> Json<JokeResponse> {
    let joke = state.joke_service.fetch_joke().await;
    Json(JokeResponse::from(joke))
}

/// Returns a random joke together with a QR code of its text.
///
/// # Endpoint
///
/// `GET /api/joke-qr/`
///
/// # Errors
///
/// Returns 500 `{"error": ...}` if QR rendering fails. The joke fetch
/// itself never fails.
pub async fn joke_qr_handler(
    State(state): State<AppState>,
) -> Result<Json<JokeQrResponse>, AppError> {
    let joke = state.joke_service.fetch_joke().await;

    let qr_image = state.qr_service.encode_base64_png(&joke.text).map_err(|e| {
        tracing::error!(error = %e, "QR generation failed");
        AppError::internal("Failed to generate QR code")
    })?;

    Ok(Json(JokeQrResponse {
        source: joke.origin.as_str(),
        joke: joke.text,
        qr_image,
    }))
}
