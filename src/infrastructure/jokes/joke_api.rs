//! JokeAPI (v2.jokeapi.dev) provider.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use super::{classify, non_blank};
use crate::domain::joke::ProviderError;
use crate::domain::joke_provider::JokeProvider;

/// Primary joke source. Requests single-part jokes with the unsafe content
/// categories blacklisted; no API key required.
pub struct JokeApiProvider {
    client: Client,
    url: String,
    timeout: Duration,
}

impl JokeApiProvider {
    pub const DEFAULT_URL: &'static str = "https://v2.jokeapi.dev/joke/Any?blacklistFlags=nsfw,religious,political,racist,sexist,explicit&type=single";

    pub fn new(client: Client, url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client,
            url: url.into(),
            timeout,
        }
    }
}

#[async_trait]
impl JokeProvider for JokeApiProvider {
    fn name(&self) -> &'static str {
        "jokeapi"
    }

    async fn try_fetch(&self) -> Result<String, ProviderError> {
        let response = self
            .client
            .get(&self.url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(classify)?;

        if !response.status().is_success() {
            return Err(ProviderError::Status(response.status().as_u16()));
        }

        let body: Value = response.json().await.map_err(classify)?;
        parse_payload(&body)
    }
}

fn parse_payload(body: &Value) -> Result<String, ProviderError> {
    if body.get("type").and_then(Value::as_str) != Some("single") {
        return Err(ProviderError::Malformed("expected a single-part joke"));
    }

    non_blank(body.get("joke").and_then(Value::as_str))
        .ok_or(ProviderError::Malformed("missing joke field"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_single_joke() {
        let body = json!({"type": "single", "joke": "A joke."});
        assert_eq!(parse_payload(&body).unwrap(), "A joke.");
    }

    #[test]
    fn test_rejects_twopart_joke() {
        let body = json!({"type": "twopart", "setup": "s", "delivery": "d"});
        assert!(matches!(
            parse_payload(&body),
            Err(ProviderError::Malformed(_))
        ));
    }

    #[test]
    fn test_rejects_missing_or_blank_joke() {
        assert!(parse_payload(&json!({"type": "single"})).is_err());
        assert!(parse_payload(&json!({"type": "single", "joke": "  "})).is_err());
    }
}
