//! DTOs for the joke endpoints.

use serde::Serialize;

use crate::domain::joke::Joke;

/// Response for `GET /api/joke/`.
#[derive(Debug, Serialize)]
pub struct JokeResponse {
    pub joke: String,
    /// `"online_api"` or `"fallback"`.
    pub source: &'static str,
}

impl From<Joke> for JokeResponse {
    fn from(joke: Joke) -> Self {
        Self {
            source: joke.origin.as_str(),
            joke: joke.text,
        }
    }
}

/// Response for `GET /api/joke-qr/`.
#[derive(Debug, Serialize)]
pub struct JokeQrResponse {
    pub joke: String,
    /// Base64-encoded PNG of the joke text.
    pub qr_image: String,
    pub source: &'static str,
}
