//! Client for the public starship API (SWAPI).
//!
//! This module fetches the starship collection and converts it into the
//! domain vehicle model.
//!
//! Key characteristics of the API:
//! - The collection is **paginated**; each page carries a `next` URL and
//!   the final page marks it null or empty
//! - Every field is served as text, including numeric ones like the
//!   cruising rate (`MGLT`)
//! - A cruising rate of `"unknown"` or `"n/a"` means the source has no
//!   data for that ship

mod client;
mod convert;
mod error;
mod types;

pub use client::{DEFAULT_BASE_URL, SwapiClient, SwapiConfig};
pub use convert::{ConversionError, Normalized, normalize_record};
pub use error::SwapiError;
pub use types::{StarshipPage, StarshipRecord};
