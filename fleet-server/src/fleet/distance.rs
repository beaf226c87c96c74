//! Travel distance input.
//!
//! Distances arrive as untrusted text from the HTTP path or the CLI. The
//! `Distance` newtype validates once at that boundary, so the calculator
//! can assume a non-negative value.

use std::fmt;
use std::num::IntErrorKind;

/// Error returned when parsing an invalid distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DistanceError {
    /// Not an integer, or negative.
    #[error("distance must be a non-negative integer")]
    Invalid,
    /// Does not fit in 64 bits.
    #[error("distance is too large to process")]
    TooLarge,
}

/// A validated non-negative travel distance in MGLT.
///
/// # Examples
///
/// ```
/// use fleet_server::fleet::Distance;
///
/// let d = Distance::parse("1000000").unwrap();
/// assert_eq!(d.get(), 1_000_000);
///
/// assert!(Distance::parse("-5").is_err());
/// assert!(Distance::parse("twelve").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Distance(i64);

impl Distance {
    /// Create a distance from an already-numeric value.
    pub fn new(value: i64) -> Result<Self, DistanceError> {
        if value < 0 {
            return Err(DistanceError::Invalid);
        }
        Ok(Self(value))
    }

    /// Parse a distance from user-supplied text.
    ///
    /// Values that overflow 64 bits are reported separately from other bad
    /// input, so callers can tell the user the magnitude was the problem
    /// rather than the format.
    pub fn parse(s: &str) -> Result<Self, DistanceError> {
        match s.parse::<i64>() {
            Ok(value) => Self::new(value),
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                    Err(DistanceError::TooLarge)
                }
                _ => Err(DistanceError::Invalid),
            },
        }
    }

    /// Returns the distance value in MGLT.
    pub fn get(&self) -> i64 {
        self.0
    }
}

impl fmt::Debug for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Distance({})", self.0)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid() {
        assert_eq!(Distance::parse("0").unwrap().get(), 0);
        assert_eq!(Distance::parse("1000000").unwrap().get(), 1_000_000);
        assert_eq!(Distance::parse("+42").unwrap().get(), 42);
        assert_eq!(
            Distance::parse(&i64::MAX.to_string()).unwrap().get(),
            i64::MAX
        );
    }

    #[test]
    fn parse_rejects_negative() {
        assert_eq!(Distance::parse("-1"), Err(DistanceError::Invalid));
        assert_eq!(Distance::parse("-1000000"), Err(DistanceError::Invalid));
    }

    #[test]
    fn parse_rejects_non_numeric() {
        assert_eq!(Distance::parse(""), Err(DistanceError::Invalid));
        assert_eq!(Distance::parse("abc"), Err(DistanceError::Invalid));
        assert_eq!(Distance::parse("12.5"), Err(DistanceError::Invalid));
        assert_eq!(Distance::parse("1 000"), Err(DistanceError::Invalid));
    }

    #[test]
    fn parse_rejects_overflow() {
        assert_eq!(
            Distance::parse("99999999999999999999"),
            Err(DistanceError::TooLarge)
        );
        assert_eq!(
            Distance::parse("-99999999999999999999"),
            Err(DistanceError::TooLarge)
        );
    }

    #[test]
    fn new_rejects_negative() {
        assert!(Distance::new(0).is_ok());
        assert!(Distance::new(7).is_ok());
        assert_eq!(Distance::new(-7), Err(DistanceError::Invalid));
    }

    #[test]
    fn display_format() {
        assert_eq!(Distance::new(13440).unwrap().to_string(), "13440");
    }
}
