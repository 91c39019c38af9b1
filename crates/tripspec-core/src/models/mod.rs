//! Data models: the trip spec output record and configuration.

pub mod config;
pub mod trip;
