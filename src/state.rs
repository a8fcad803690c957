use std::sync::Arc;

use crate::application::services::{AccountService, JokeService, QrService};

/// Shared application state injected into all handlers.
#[derive(Clone)]
pub struct AppState {
    pub joke_service: Arc<JokeService>,
    pub qr_service: Arc<QrService>,
    pub account_service: Arc<AccountService>,
    /// Origin the OAuth handoff redirects to.
    pub frontend_origin: String,
}
