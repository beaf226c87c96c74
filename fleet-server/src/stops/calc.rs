//! Resupply stop calculation.
//!
//! Pure arithmetic over the fetched fleet: how many times must each
//! vehicle stop to resupply while covering a given distance?

use std::collections::HashMap;

use crate::fleet::{Distance, Vehicle, endurance_hours};

/// Compute the stop count for a single vehicle, if one can be computed.
///
/// The rules, in order:
/// 1. A vehicle that cannot move (`cruising_rate <= 0`) needs `Some(0)`
///    stops; it is reported rather than hidden.
/// 2. A vehicle whose endurance text does not parse is excluded (`None`).
/// 3. Otherwise the vehicle covers `cruising_rate * endurance_hours` per
///    leg. A zero-length leg (zero endurance), or one too large to
///    represent, excludes the vehicle the same way.
/// 4. The stop count is the number of whole legs that fit in the distance,
///    minus one when the distance is an exact positive multiple of the
///    leg: arriving exactly at the destination needs no final stop.
pub fn stops_for_vehicle(distance: Distance, vehicle: &Vehicle) -> Option<i64> {
    if vehicle.cruising_rate <= 0 {
        return Some(0);
    }

    let hours = endurance_hours(&vehicle.endurance).ok()?;
    let max_leg = vehicle.cruising_rate.checked_mul(hours)?;
    if max_leg == 0 {
        return None;
    }

    let mut stops = distance.get() / max_leg;
    if distance.get() % max_leg == 0 && stops > 0 {
        stops -= 1;
    }

    Some(stops)
}

/// Compute stop counts for a whole fleet.
///
/// Vehicles whose stop count cannot be computed are left out of the
/// result. Duplicate names collapse to the last vehicle in input order.
pub fn calculate_stops(distance: Distance, fleet: &[Vehicle]) -> HashMap<String, i64> {
    let mut results = HashMap::with_capacity(fleet.len());

    for vehicle in fleet {
        if let Some(stops) = stops_for_vehicle(distance, vehicle) {
            results.insert(vehicle.name.clone(), stops);
        }
    }

    results
}
