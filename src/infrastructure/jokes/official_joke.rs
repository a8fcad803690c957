//! Official Joke API provider.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use super::{classify, non_blank};
use crate::domain::joke::ProviderError;
use crate::domain::joke_provider::JokeProvider;

/// Secondary source. Returns setup/punchline pairs which are joined into a
/// single line.
pub struct OfficialJokeProvider {
    client: Client,
    url: String,
    timeout: Duration,
}

impl OfficialJokeProvider {
    pub const DEFAULT_URL: &'static str = "https://official-joke-api.appspot.com/random_joke";

    pub fn new(client: Client, url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client,
            url: url.into(),
            timeout,
        }
    }
}

#[async_trait]
impl JokeProvider for OfficialJokeProvider {
    fn name(&self) -> &'static str {
        "official_joke_api"
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
    let setup = non_blank(body.get("setup").and_then(Value::as_str))
        .ok_or(ProviderError::Malformed("missing setup field"))?;
    let punchline = non_blank(body.get("punchline").and_then(Value::as_str))
        .ok_or(ProviderError::Malformed("missing punchline field"))?;

    Ok(format!("{setup} {punchline}"))
}
