//! Trait seam for remote joke sources.

use crate::domain::joke::ProviderError;
use async_trait::async_trait;

/// A single remote joke source.
///
/// Each provider performs one bounded lookup against its endpoint and either
/// yields a non-empty joke string or reports why the attempt failed. The
/// resolver in [`crate::application::services::JokeService`] walks an ordered
/// list of these and stops at the first success.
///
/// # Implementations
///
/// - [`crate::infrastructure::jokes::JokeApiProvider`]
/// - [`crate::infrastructure::jokes::OfficialJokeProvider`]
/// - [`crate::infrastructure::jokes::DadJokeProvider`]
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JokeProvider: Send + Sync {
    /// Short identifier used in logs and health reporting.
    fn name(&self) -> &'static str;

    /// Attempts a single fetch. Bounded by the provider's timeout; never
    /// retried.
    ///
    /// # Errors
    ///
    /// Returns a [`ProviderError`] describing the failure. Callers treat
    /// every variant the same way and move on to the next provider.
    async fn try_fetch(&self) -> Result<String, ProviderError>;
}
