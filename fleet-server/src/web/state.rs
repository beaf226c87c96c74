//! Application state for the web layer.

use std::sync::Arc;
use std::time::Duration;

use crate::swapi::SwapiClient;

/// Shared application state.
///
/// Contains everything a request handler needs to compute stop counts.
#[derive(Clone)]
pub struct AppState {
    /// Client used to fetch the starship fleet
    pub swapi: Arc<SwapiClient>,

    /// Deadline applied to each whole-fleet fetch
    pub fetch_timeout: Duration,
}

impl AppState {
    /// Create a new app state.
    pub fn new(swapi: SwapiClient, fetch_timeout: Duration) -> Self {
        Self {
            swapi: Arc::new(swapi),
            fetch_timeout,
        }
    }
}
