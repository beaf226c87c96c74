//! Wire types for the starship API.
//!
//! These mirror the JSON shape of the paginated starship listing. Only the
//! fields the planner consumes are modelled; serde ignores the rest.
//! Record fields default to the empty string when absent, so a sparse
//! record degrades to a skippable one instead of failing the whole page.

use serde::Deserialize;

/// One page of the starship collection.
#[derive(Debug, Clone, Deserialize)]
pub struct StarshipPage {
    /// Total number of records across all pages.
    #[serde(default)]
    pub count: i64,
    /// URL of the next page. Null or empty on the final page.
    #[serde(default)]
    pub next: Option<String>,
    /// URL of the previous page, if any.
    #[serde(default)]
    pub previous: Option<String>,
    /// Records on this page, in listing order.
    #[serde(default)]
    pub results: Vec<StarshipRecord>,
}

/// One starship record as served by the API.
///
/// Everything is text on the wire, including the numeric-looking fields.
#[derive(Debug, Clone, Deserialize)]
pub struct StarshipRecord {
    #[serde(default)]
    pub name: String,
    /// Cruising rate in MGLT. May be a sentinel like "unknown" or "n/a".
    #[serde(rename = "MGLT", default)]
    pub mglt: String,
    /// Endurance text, e.g. "2 months".
    #[serde(default)]
    pub consumables: String,
}
