//! Presentation ordering for stop results.
//!
//! The calculator hands back an unordered name-to-stops map; every surface
//! (HTTP, CLI) presents it the same way, so the ordering lives here.

use std::collections::HashMap;

use serde::Serialize;

/// One row of a stop report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StopRow {
    pub name: String,
    pub stops: i64,
}

/// Order stop counts for presentation.
///
/// Rows are sorted by:
/// 1. Stop count (fewer first)
/// 2. Name, compared case-insensitively
pub fn sorted_rows(counts: &HashMap<String, i64>) -> Vec<StopRow> {
    let mut rows: Vec<StopRow> = counts
        .iter()
        .map(|(name, stops)| StopRow {
            name: name.clone(),
            stops: *stops,
        })
        .collect();

    rows.sort_by(|a, b| {
        let by_stops = a.stops.cmp(&b.stops);
        if by_stops != std::cmp::Ordering::Equal {
            return by_stops;
        }
        a.name.to_lowercase().cmp(&b.name.to_lowercase())
    });

    rows
}
