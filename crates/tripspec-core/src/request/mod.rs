//! Travel request extraction module.

mod parser;
pub mod rules;

pub use parser::TripRequestParser;

use crate::models::trip::{ParseResponse, PingResponse, TripSpec};

/// Trait for trip request parsers.
pub trait TripParser {
    /// Parse one free-form request. Never fails; unrecognized fields stay empty.
    fn parse(&self, text: &str) -> TripSpec;

    /// Parse and wrap the spec in the success envelope.
    fn parse_response(&self, text: &str) -> ParseResponse {
        self.parse(text).into()
    }
}

/// Parse a request with default settings.
pub fn parse_trip_request(text: &str) -> ParseResponse {
    TripRequestParser::new().parse_response(text)
}

/// Liveness check.
pub fn ping() -> PingResponse {
    PingResponse::default()
}
