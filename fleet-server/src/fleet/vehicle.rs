//! Vehicle model.

/// A vehicle in the fleet, as normalized from a remote starship record.
///
/// The cruising rate is the distance covered per hour of travel, in MGLT.
/// The endurance text is carried verbatim from the wire ("2 months",
/// "1 week", ...) and is only parsed when stops are calculated, because a
/// vehicle with unparseable endurance is still a valid fleet member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    /// Display name, copied verbatim from the source record.
    pub name: String,
    /// Distance per hour of travel. Never negative.
    pub cruising_rate: i64,
    /// Free-text endurance, e.g. "2 months".
    pub endurance: String,
}

impl Vehicle {
    /// Create a vehicle from already-validated parts.
    pub fn new(name: String, cruising_rate: i64, endurance: String) -> Self {
        Self {
            name,
            cruising_rate,
            endurance,
        }
    }
}
