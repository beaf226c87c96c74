//! Resupply stop computation.
//!
//! The calculator is pure arithmetic over a fleet; the planner composes it
//! with a vehicle source; the report module orders results for
//! presentation.

mod calc;
mod planner;
mod report;

pub use calc::{calculate_stops, stops_for_vehicle};
pub use planner::{StopPlanner, VehicleSource, deadline_after};
pub use report::{StopRow, sorted_rows};
