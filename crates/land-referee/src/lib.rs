//! Land Referee core: catalog, scenario scoring, and referee guidance.
//!
//! The service crate in `services/api` wires this library to a CLI and an
//! HTTP server; everything with decision logic lives here.

pub mod catalog;
pub mod config;
pub mod error;
pub mod referee;
pub mod telemetry;
