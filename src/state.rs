//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers and the session hook via the
//! `State` extractor. It holds the parsed config and the backend API handle.
//! Nothing per-user lives here: identity is resolved per request and carried
//! in request extensions.

use std::sync::Arc;

use crate::api::BackendApi;
use crate::config::Config;

/// Clone is required by Axum; inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub api: Arc<dyn BackendApi>,
}

impl AppState {
    #[must_use]
    pub fn new(config: Config, api: Arc<dyn BackendApi>) -> Self {
        Self { config: Arc::new(config), api }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
