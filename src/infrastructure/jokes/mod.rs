//! Remote joke providers.
//!
//! Three independent sources, tried in this order by the resolver:
//! JokeAPI, the Official Joke API, then icanhazdadjoke. Each takes its
//! endpoint URL at construction so tests can point it at a mock server.

mod dad_joke;
mod joke_api;
mod official_joke;

pub use dad_joke::DadJokeProvider;
pub use joke_api::JokeApiProvider;
pub use official_joke::OfficialJokeProvider;

use crate::domain::joke::ProviderError;

/// Maps a reqwest failure to the provider error taxonomy.
fn classify(err: reqwest::Error) -> ProviderError {
    if err.is_timeout() {
        ProviderError::Timeout
    } else if err.is_decode() {
        ProviderError::Malformed("response body was not valid JSON")
    } else {
        ProviderError::Transport(err.to_string())
    }
}

/// A payload field only counts if it is present and non-blank; jokes are
/// never empty strings.
fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(Some("a joke")), Some("a joke".to_string()));
        assert_eq!(non_blank(Some("  padded  ")), Some("padded".to_string()));
        assert_eq!(non_blank(Some("")), None);
        assert_eq!(non_blank(Some("   ")), None);
        assert_eq!(non_blank(None), None);
    }
}
