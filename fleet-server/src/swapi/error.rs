//! Starship API error types.

/// Errors that can occur when fetching the fleet from the starship API.
///
/// A fetch is all-or-nothing: any of these aborts the pagination walk and
/// no partial fleet is returned. `Cancelled` is deliberately separate from
/// the transport variants so callers can tell "the upstream failed" apart
/// from "we ran out of time".
#[derive(Debug, thiserror::Error)]
pub enum SwapiError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse a page body
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        /// Truncated response body, for diagnostics.
        body: Option<String>,
    },

    /// The caller's deadline expired before the walk finished
    #[error("fleet fetch cancelled: deadline exceeded")]
    Cancelled,
}

impl SwapiError {
    /// True when the fetch was cut short by the caller's deadline rather
    /// than an upstream failure.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, SwapiError::Cancelled)
    }
}
