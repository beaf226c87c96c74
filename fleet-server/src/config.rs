//! Server configuration from the environment.

use std::time::Duration;

use crate::swapi::DEFAULT_BASE_URL;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

/// Configuration for the fleet server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port the HTTP listener binds
    pub port: u16,

    /// Base URL of the starship data source
    pub swapi_url: String,

    /// Whole-fetch deadline, in seconds
    pub fetch_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Unset or unparseable values fall back to the defaults:
    /// `PORT` (8080), `SWAPI_URL` (the public SWAPI instance) and
    /// `FETCH_TIMEOUT_SECS` (30).
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let swapi_url =
            std::env::var("SWAPI_URL").unwrap_or_else(|_| String::from(DEFAULT_BASE_URL));

        let fetch_timeout_secs = std::env::var("FETCH_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_FETCH_TIMEOUT_SECS);

        Self {
            port,
            swapi_url,
            fetch_timeout_secs,
        }
    }

    /// Whole-fetch deadline as a `Duration`.
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            swapi_url: String::from(DEFAULT_BASE_URL),
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
        }
    }
}
