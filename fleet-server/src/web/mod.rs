//! Web layer for the resupply stop calculator.
//!
//! Provides HTTP endpoints for computing per-vehicle stop counts.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
