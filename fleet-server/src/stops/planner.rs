//! Fleet stop planning.
//!
//! Composes a vehicle source with the stop calculator. The source is a
//! trait so the planning path can be tested with canned fleets instead of
//! HTTP.

use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;

use crate::fleet::{Distance, Vehicle};
use crate::swapi::{SwapiClient, SwapiError};

use super::calc::calculate_stops;

/// Trait for providing the vehicle fleet.
///
/// This abstraction allows the planner to be tested with mock data.
pub trait VehicleSource {
    /// Fetch every vehicle the source knows about.
    ///
    /// When `deadline` is given the fetch must finish before it, or fail
    /// with [`SwapiError::Cancelled`].
    fn fetch_fleet(
        &self,
        deadline: Option<Instant>,
    ) -> impl Future<Output = Result<Vec<Vehicle>, SwapiError>> + Send;
}

impl VehicleSource for SwapiClient {
    fn fetch_fleet(
        &self,
        deadline: Option<Instant>,
    ) -> impl Future<Output = Result<Vec<Vehicle>, SwapiError>> + Send {
        SwapiClient::fetch_fleet(self, deadline)
    }
}

/// Deadline `timeout` from now.
///
/// Returns `None` when the sum cannot be represented by the clock; callers
/// treat that as fetching without a deadline.
pub fn deadline_after(timeout: Duration) -> Option<Instant> {
    Instant::now().checked_add(timeout)
}

/// Resupply stop planner.
pub struct StopPlanner<'a, S: VehicleSource> {
    source: &'a S,
}

impl<'a, S: VehicleSource> StopPlanner<'a, S> {
    /// Create a new planner over a vehicle source.
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Fetch the fleet and compute resupply stops for the given distance.
    ///
    /// The fleet is fetched fresh on every call; nothing is reused between
    /// plans.
    pub async fn plan(
        &self,
        distance: Distance,
        deadline: Option<Instant>,
    ) -> Result<HashMap<String, i64>, SwapiError> {
        let fleet = self.source.fetch_fleet(deadline).await?;
        Ok(calculate_stops(distance, &fleet))
    }
}
