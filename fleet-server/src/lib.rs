//! Starship resupply stop calculator.
//!
//! A web service that answers: "for a journey of N mega lights, how many
//! resupply stops does each known starship need?"

pub mod config;
pub mod fleet;
pub mod stops;
pub mod swapi;
pub mod web;
