//! Conversion from starship API records to domain vehicles.
//!
//! This module is the single boundary where untrusted wire text becomes a
//! typed vehicle. Nothing downstream re-inspects the raw cruising-rate
//! text.

use crate::fleet::Vehicle;

use super::types::StarshipRecord;

/// Error during record to vehicle conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// The cruising rate was neither a sentinel nor a non-negative integer
    #[error("invalid cruising rate: {0}")]
    InvalidCruisingRate(String),
}

/// Outcome of normalizing a record, when it is not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Normalized {
    /// The record produced a usable vehicle.
    Vehicle(Vehicle),
    /// The source has no cruising-rate data for this ship.
    Skipped,
}

/// Sentinels the source uses for "no data". Matched exactly, with no
/// trimming or case folding.
const NO_DATA_SENTINELS: [&str; 2] = ["unknown", "n/a"];

/// Normalize one wire record into a vehicle.
///
/// A cruising rate of exactly `"unknown"` or `"n/a"` yields
/// [`Normalized::Skipped`]. Any other text must parse as a non-negative
/// integer; otherwise the record is rejected with
/// [`ConversionError::InvalidCruisingRate`] and the caller decides whether
/// to drop it. Name and endurance text are copied verbatim; endurance is
/// deliberately not validated here, since a vehicle with unparseable
/// endurance is still part of the fleet.
pub fn normalize_record(record: &StarshipRecord) -> Result<Normalized, ConversionError> {
    if NO_DATA_SENTINELS.contains(&record.mglt.as_str()) {
        return Ok(Normalized::Skipped);
    }

    let cruising_rate: i64 = record
        .mglt
        .parse()
        .map_err(|_| ConversionError::InvalidCruisingRate(record.mglt.clone()))?;

    // The wire never legitimately carries a negative rate; treat one like
    // any other unparseable value.
    if cruising_rate < 0 {
        return Err(ConversionError::InvalidCruisingRate(record.mglt.clone()));
    }

    Ok(Normalized::Vehicle(Vehicle::new(
        record.name.clone(),
        cruising_rate,
        record.consumables.clone(),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, mglt: &str, consumables: &str) -> StarshipRecord {
        StarshipRecord {
            name: name.to_string(),
            mglt: mglt.to_string(),
            consumables: consumables.to_string(),
        }
    }

    #[test]
    fn numeric_rate_becomes_vehicle() {
        let normalized = normalize_record(&record("Millennium Falcon", "75", "2 months")).unwrap();

        assert_eq!(
            normalized,
            Normalized::Vehicle(Vehicle::new(
                "Millennium Falcon".to_string(),
                75,
                "2 months".to_string()
            ))
        );
    }

    #[test]
    fn zero_rate_is_a_vehicle() {
        let normalized = normalize_record(&record("Death Star", "0", "3 years")).unwrap();

        match normalized {
            Normalized::Vehicle(v) => assert_eq!(v.cruising_rate, 0),
            other => panic!("expected vehicle, got {other:?}"),
        }
    }

    #[test]
    fn sentinels_are_skipped() {
        assert_eq!(
            normalize_record(&record("Ghost", "unknown", "1 week")).unwrap(),
            Normalized::Skipped
        );
        assert_eq!(
            normalize_record(&record("Phantom", "n/a", "1 week")).unwrap(),
            Normalized::Skipped
        );
    }

    #[test]
    fn sentinel_match_is_exact() {
        // Case or whitespace variants are not sentinels; they fall through
        // to numeric parsing and fail there.
        assert!(normalize_record(&record("A", "Unknown", "1 week")).is_err());
        assert!(normalize_record(&record("B", "N/A", "1 week")).is_err());
        assert!(normalize_record(&record("C", " unknown", "1 week")).is_err());
    }

    #[test]
    fn non_numeric_rate_is_an_error() {
        let err = normalize_record(&record("Junker", "not a number", "1 day")).unwrap_err();
        assert_eq!(
            err,
            ConversionError::InvalidCruisingRate("not a number".to_string())
        );
    }

    #[test]
    fn empty_rate_is_an_error() {
        // A record that arrived without an MGLT field defaults to "".
        assert!(normalize_record(&record("Sparse", "", "1 day")).is_err());
    }

    #[test]
    fn negative_rate_is_an_error() {
        assert!(normalize_record(&record("Backwards", "-5", "1 day")).is_err());
    }

    #[test]
    fn endurance_text_is_not_validated() {
        let normalized = normalize_record(&record("Wreck", "10", "total junk")).unwrap();

        match normalized {
            Normalized::Vehicle(v) => assert_eq!(v.endurance, "total junk"),
            other => panic!("expected vehicle, got {other:?}"),
        }
    }
}
