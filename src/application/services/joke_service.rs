//! Joke source resolver.

use crate::domain::joke::{FALLBACK_JOKES, Joke};
use crate::domain::joke_provider::JokeProvider;
use rand::Rng;

/// Resolves a joke from an ordered chain of remote providers with a local
/// fallback.
///
/// Providers are tried strictly in order, one bounded attempt each, and the
/// first success wins; later providers are never contacted. A provider
/// failure is logged and absorbed, never surfaced to the caller. When the
/// whole chain is exhausted, one of the ten fixed fallback jokes is picked
/// uniformly at random.
pub struct JokeService {
    providers: Vec<Box<dyn JokeProvider>>,
}

impl JokeService {
    pub fn new(providers: Vec<Box<dyn JokeProvider>>) -> Self {
        Self { providers }
    }

    /// Provider names in chain order, for health reporting.
    pub fn provider_names(&self) -> Vec<&'static str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// Fetches a joke. Infallible: the fallback list guarantees a non-empty
    /// result even with every remote source down.
    pub async fn fetch_joke(&self) -> Joke {
        for provider in &self.providers {
            match provider.try_fetch().await {
                Ok(text) => {
                    tracing::debug!(provider = provider.name(), "joke fetched");
                    return Joke::online(text);
                }
                Err(err) => {
                    tracing::debug!(provider = provider.name(), error = %err, "provider failed");
                }
            }
        }

        let idx = rand::rng().random_range(0..FALLBACK_JOKES.len());
        Joke::fallback(FALLBACK_JOKES[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::joke::{JokeOrigin, ProviderError};
    use crate::domain::joke_provider::MockJokeProvider;

    fn failing_provider(name: &'static str) -> MockJokeProvider {
        let mut provider = MockJokeProvider::new();
        provider.expect_name().return_const(name);
        provider
            .expect_try_fetch()
            .times(1)
            .returning(|| Err(ProviderError::Timeout));
        provider
    }

    #[tokio::test]
    async fn test_first_success_wins() {
        let mut first = MockJokeProvider::new();
        first.expect_name().return_const("first");
        first
            .expect_try_fetch()
            .times(1)
            .returning(|| Ok("A joke.".to_string()));

        let mut second = MockJokeProvider::new();
        second.expect_name().return_const("second");
        second.expect_try_fetch().times(0);

        let service = JokeService::new(vec![Box::new(first), Box::new(second)]);
        let joke = service.fetch_joke().await;

        assert_eq!(joke.text, "A joke.");
        assert_eq!(joke.origin, JokeOrigin::Online);
    }

    #[tokio::test]
    async fn test_failure_falls_through_in_order() {
        let first = failing_provider("first");

        let mut second = MockJokeProvider::new();
        second.expect_name().return_const("second");
        second
            .expect_try_fetch()
            .times(1)
            .returning(|| Ok("Second joke.".to_string()));

        let service = JokeService::new(vec![Box::new(first), Box::new(second)]);
        let joke = service.fetch_joke().await;

        assert_eq!(joke.text, "Second joke.");
        assert_eq!(joke.origin, JokeOrigin::Online);
    }

    #[tokio::test]
    async fn test_exhausted_chain_uses_fallback() {
        let service = JokeService::new(vec![
            Box::new(failing_provider("first")),
            Box::new(failing_provider("second")),
            Box::new(failing_provider("third")),
        ]);

        let joke = service.fetch_joke().await;

        assert_eq!(joke.origin, JokeOrigin::Fallback);
        assert!(FALLBACK_JOKES.contains(&joke.text.as_str()));
        assert!(!joke.text.is_empty());
    }

    #[tokio::test]
    async fn test_empty_chain_uses_fallback() {
        let service = JokeService::new(Vec::new());
        let joke = service.fetch_joke().await;

        assert_eq!(joke.origin, JokeOrigin::Fallback);
        assert!(FALLBACK_JOKES.contains(&joke.text.as_str()));
    }

    #[test]
    fn test_provider_names_in_order() {
        let mut first = MockJokeProvider::new();
        first.expect_name().return_const("first");
        let mut second = MockJokeProvider::new();
        second.expect_name().return_const("second");

        let service = JokeService::new(vec![Box::new(first), Box::new(second)]);
        assert_eq!(service.provider_names(), vec!["first", "second"]);
    }
}
