//! Endurance ("consumables") text parsing.
//!
//! The remote API reports how long a vehicle can travel between resupplies
//! as free text like "2 months" or "1 week". This module converts that
//! text into a whole number of hours. Months are 30 days and years are
//! 365; the source data carries no more precision than that.

/// Error returned when parsing an invalid endurance string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EnduranceError {
    /// The input was the empty string.
    #[error("endurance text is empty")]
    Empty,
    /// Anything else that does not conform to "<quantity> <unit>".
    #[error("invalid endurance format: {reason}")]
    InvalidFormat { reason: &'static str },
}

impl EnduranceError {
    fn invalid(reason: &'static str) -> Self {
        Self::InvalidFormat { reason }
    }
}

const HOURS_PER_DAY: i64 = 24;
const HOURS_PER_WEEK: i64 = 7 * 24;
const HOURS_PER_MONTH: i64 = 30 * 24;
const HOURS_PER_YEAR: i64 = 365 * 24;

/// Parse an endurance string into a total number of hours.
///
/// The expected form is "<quantity> <unit>": a non-negative integer, one
/// space, and one of `year`, `month`, `week` or `day`. Units match
/// case-insensitively and a single trailing `s` is ignored, so "2 Months"
/// and "1 week" both parse. Leading and trailing whitespace is allowed.
///
/// # Examples
///
/// ```
/// use fleet_server::fleet::endurance_hours;
///
/// assert_eq!(endurance_hours("3 years").unwrap(), 26280);
/// assert_eq!(endurance_hours("1 week").unwrap(), 168);
/// assert_eq!(endurance_hours("6 days").unwrap(), 144);
/// assert!(endurance_hours("unknown").is_err());
/// ```
pub fn endurance_hours(text: &str) -> Result<i64, EnduranceError> {
    if text.is_empty() {
        return Err(EnduranceError::Empty);
    }

    let parts: Vec<&str> = text.trim().split(' ').collect();
    if parts.len() != 2 {
        return Err(EnduranceError::invalid("expected '<quantity> <unit>'"));
    }

    let quantity: i64 = parts[0]
        .parse()
        .map_err(|_| EnduranceError::invalid("quantity is not an integer"))?;
    if quantity < 0 {
        return Err(EnduranceError::invalid("quantity is negative"));
    }

    let unit = parts[1].to_ascii_lowercase();
    let unit_hours = match unit.strip_suffix('s').unwrap_or(&unit) {
        "year" => HOURS_PER_YEAR,
        "month" => HOURS_PER_MONTH,
        "week" => HOURS_PER_WEEK,
        "day" => HOURS_PER_DAY,
        _ => return Err(EnduranceError::invalid("unrecognized unit")),
    };

    quantity
        .checked_mul(unit_hours)
        .ok_or(EnduranceError::invalid("duration is too large"))
}
