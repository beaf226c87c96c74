//! Starship API HTTP client.
//!
//! Walks the paginated starship listing and converts each record into the
//! domain vehicle model. Pages are fetched strictly one at a time, in
//! listing order; nothing is cached between calls, and the caller can
//! bound the whole walk with a deadline.

use tokio::time::Instant;
use tracing::{debug, warn};

use crate::fleet::Vehicle;

use super::convert::{Normalized, normalize_record};
use super::error::SwapiError;
use super::types::StarshipPage;

/// Default base URL for the public starship API.
pub const DEFAULT_BASE_URL: &str = "https://swapi.dev";

/// Default per-request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for the starship API client.
#[derive(Debug, Clone)]
pub struct SwapiConfig {
    /// Base URL for the API (defaults to the public instance)
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl SwapiConfig {
    /// Create a config with defaults.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing, or a mirror).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for SwapiConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Starship API client.
#[derive(Debug, Clone)]
pub struct SwapiClient {
    http: reqwest::Client,
    base_url: String,
}

impl SwapiClient {
    /// Create a new client with the given configuration.
    pub fn new(config: SwapiConfig) -> Result<Self, SwapiError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Fetch the whole fleet.
    ///
    /// Follows `next` links from the first page until the listing ends,
    /// normalizing records as they arrive. Ships the source marks as
    /// having no cruising-rate data are dropped quietly; ships with a
    /// malformed rate are dropped with a warning. A transport or decode
    /// failure aborts the walk, returning no partial fleet.
    ///
    /// When `deadline` is given the whole walk must finish before it,
    /// otherwise the fetch ends with [`SwapiError::Cancelled`] and the
    /// remaining pages are never requested.
    pub async fn fetch_fleet(&self, deadline: Option<Instant>) -> Result<Vec<Vehicle>, SwapiError> {
        let mut fleet = Vec::new();
        let mut next_url = format!("{}/api/starships/", self.base_url);
        let mut page_no = 1u32;

        loop {
            let page = match deadline {
                Some(at) => tokio::time::timeout_at(at, self.fetch_page(&next_url))
                    .await
                    .map_err(|_| SwapiError::Cancelled)??,
                None => self.fetch_page(&next_url).await?,
            };

            debug!(
                page = page_no,
                records = page.results.len(),
                "fetched starship page"
            );

            for record in &page.results {
                match normalize_record(record) {
                    Ok(Normalized::Vehicle(vehicle)) => fleet.push(vehicle),
                    Ok(Normalized::Skipped) => {
                        debug!(name = %record.name, "skipping ship without cruising-rate data");
                    }
                    Err(e) => {
                        warn!(name = %record.name, error = %e, "skipping ship");
                    }
                }
            }

            match page.next {
                Some(url) if !url.is_empty() => next_url = url,
                _ => break,
            }
            page_no += 1;
        }

        Ok(fleet)
    }

    /// Fetch and decode a single page.
    async fn fetch_page(&self, url: &str) -> Result<StarshipPage, SwapiError> {
        let response = self.http.get(url).send().await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SwapiError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| SwapiError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }
}
