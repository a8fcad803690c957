//! DTOs for the Caesar cipher endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body for `POST /api/caesar/` and `POST /api/caesar-qr/`.
///
/// `shift` is accepted as either a JSON number or a numeric string; the
/// handler coerces anything unusable to the default of 3 instead of
/// rejecting the request.
#[derive(Debug, Deserialize)]
pub struct CaesarRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub shift: Option<Value>,
}

/// Response for `POST /api/caesar/`.
#[derive(Debug, Serialize)]
pub struct CaesarResponse {
    pub original_text: String,
    pub encoded_text: String,
    /// The shift actually applied, after coercion.
    pub shift: i32,
}

/// Response for `POST /api/caesar-qr/`.
#[derive(Debug, Serialize)]
pub struct CaesarQrResponse {
    pub original_text: String,
    pub encoded_text: String,
    pub shift: i32,
    /// Base64-encoded PNG of the encoded text.
    pub qr_image: String,
}
