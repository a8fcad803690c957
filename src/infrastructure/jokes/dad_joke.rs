//! icanhazdadjoke provider.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::ACCEPT;
use serde_json::Value;
use std::time::Duration;

use super::{classify, non_blank};
use crate::domain::joke::ProviderError;
use crate::domain::joke_provider::JokeProvider;

/// Tertiary source. The API returns HTML unless asked for JSON explicitly.
pub struct DadJokeProvider {
    client: Client,
    url: String,
    timeout: Duration,
}

impl DadJokeProvider {
    pub const DEFAULT_URL: &'static str = "https://icanhazdadjoke.com/";

    pub fn new(client: Client, url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client,
            url: url.into(),
            timeout,
        }
    }
}

#[async_trait]
impl JokeProvider for DadJokeProvider {
    fn name(&self) -> &'static str {
        "icanhazdadjoke"
    }

    async fn try_fetch(&self) -> Result<String, ProviderError> {
        let response = self
            .client
            .get(&self.url)
            .header(ACCEPT, "application/json")
            .timeout(self.timeout)
            .send()
            .await
            .map_err(classify)?;

        if !response.status().is_success() {
            return Err(ProviderError::Status(response.status().as_u16()));
        }

        let body: Value = response.json().await.map_err(classify)?;
        non_blank(body.get("joke").and_then(Value::as_str))
            .ok_or(ProviderError::Malformed("missing joke field"))
    }
}
