//! Handlers for the Caesar cipher endpoints.

use axum::{Json, extract::State};

use crate::api::dto::caesar::{CaesarQrResponse, CaesarRequest, CaesarResponse};
use crate::application::services::caesar::{CipherMode, effective_shift, shift_text};
use crate::error::AppError;
use crate::state::AppState;

/// Encodes text with a Caesar shift.
///
/// # Endpoint
///
/// `POST /api/caesar/`
///
/// # Request Body
///
/// ```json
/// { "text": "Hello, World!", "shift": 3 }
/// ```
///
/// # Errors
///
/// Returns 400 if `text` is missing or empty. An invalid `shift` is not an
/// error; it silently defaults to 3 and the response reports the shift that
/// was actually used.
pub async fn caesar_handler(
    Json(payload): Json<CaesarRequest>,
) -> Result<Json<CaesarResponse>, AppError> {
    let (text, shift) = validate_payload(payload)?;
    let encoded_text = shift_text(&text, shift, CipherMode::Encode);

    Ok(Json(CaesarResponse {
        original_text: text,
        encoded_text,
        shift,
    }))
}

/// Encodes text with a Caesar shift and renders the result as a QR code.
///
/// # Endpoint
///
/// `POST /api/caesar-qr/`
///
/// # Errors
///
/// Returns 400 for missing text, 500 if QR rendering fails.
pub async fn caesar_qr_handler(
    State(state): State<AppState>,
    Json(payload): Json<CaesarRequest>,
) -> Result<Json<CaesarQrResponse>, AppError> {
    let (text, shift) = validate_payload(payload)?;
    let encoded_text = shift_text(&text, shift, CipherMode::Encode);

    let qr_image = state
        .qr_service
        .encode_base64_png(&encoded_text)
        .map_err(|e| {
            tracing::error!(error = %e, "QR generation failed");
            AppError::internal("Failed to generate QR code")
        })?;

    Ok(Json(CaesarQrResponse {
        original_text: text,
        encoded_text,
        shift,
        qr_image,
    }))
}

/// An empty text field is treated the same as a missing one.
fn validate_payload(payload: CaesarRequest) -> Result<(String, i32), AppError> {
    let text = payload
        .text
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::bad_request("Text is required"))?;

    Ok((text, effective_shift(payload.shift.as_ref())))
}
