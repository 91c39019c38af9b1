//! Core library for travel request parsing.
//!
//! This crate provides:
//! - Lexicon tables and compiled patterns for travel phrasing
//! - Rule-based extractors (places, date windows, duration, travelers, budget, interests, constraints)
//! - The `TripSpec` output model and its response envelope
//! - Parser configuration

pub mod error;
pub mod models;
pub mod request;

pub use error::{Result, TripSpecError};
pub use models::config::TripSpecConfig;
pub use models::trip::{
    Budget, BudgetTag, Currency, Interest, ParseResponse, PingResponse, Travelers, TripSpec,
};
pub use request::{TripParser, TripRequestParser, parse_trip_request, ping};
