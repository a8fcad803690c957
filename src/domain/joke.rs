//! Joke value types and provider error taxonomy.

use thiserror::Error;

/// Fixed fallback list used when every remote provider fails.
///
/// Compile-time constant; the resolver never mutates it.
pub const FALLBACK_JOKES: [&str; 10] = [
    "Why don't scientists trust atoms? Because they make up everything!",
    "I told my wife she was drawing her eyebrows too high. She looked surprised.",
    "Why don't programmers like nature? It has too many bugs.",
    "I haven't slept for ten days, because that would be too long.",
    "Why did the scarecrow win an award? He was outstanding in his field!",
    "I used to hate facial hair, but then it grew on me.",
    "Why don't eggs tell jokes? They'd crack each other up!",
    "What do you call a fake noodle? An impasta!",
    "Why did the coffee file a police report? It got mugged!",
    "How does a penguin build its house? Igloos it together!",
];

/// Where a joke came from.
///
/// Carried explicitly on [`Joke`] rather than inferred after the fact by
/// comparing the text against the fallback list, which would misreport a
/// remote joke that happens to match a fallback literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JokeOrigin {
    Online,
    Fallback,
}

impl JokeOrigin {
    /// Wire representation used in the `source` field of responses.
    pub fn as_str(self) -> &'static str {
        match self {
            JokeOrigin::Online => "online_api",
            JokeOrigin::Fallback => "fallback",
        }
    }
}

/// A joke together with its provenance. The text is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Joke {
    pub text: String,
    pub origin: JokeOrigin,
}

impl Joke {
    pub fn online(text: String) -> Self {
        Self {
            text,
            origin: JokeOrigin::Online,
        }
    }

    pub fn fallback(text: &str) -> Self {
        Self {
            text: text.to_string(),
            origin: JokeOrigin::Fallback,
        }
    }
}

/// Why a single provider attempt failed.
///
/// Distinguished so the resolver can log what went wrong; control flow is
/// the same for every variant (skip to the next provider).
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request timed out")]
    Timeout,
    #[error("transport error: {0}")]
    Transport(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Malformed(&'static str),
}
