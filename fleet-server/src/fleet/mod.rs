//! Domain types for the resupply planner.
//!
//! This module contains the core domain model: the vehicle as normalized
//! from the remote API, the validated travel distance, and the endurance
//! text parser. Validation happens at construction time, so code that
//! receives these types can trust their invariants.

mod distance;
mod endurance;
mod vehicle;

pub use distance::{Distance, DistanceError};
pub use endurance::{EnduranceError, endurance_hours};
pub use vehicle::Vehicle;
