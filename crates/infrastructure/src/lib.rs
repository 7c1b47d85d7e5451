//! Infrastructure layer - Adapters and wiring
//!
//! Implements the application ports on top of the integration clients,
//! maps client errors into application errors, and assembles a ready
//! `TimeZoneService` from configuration.

pub mod adapters;
pub mod config;
pub mod telemetry;
pub mod wiring;

pub use adapters::{GazetteerAdapter, IpGeoAdapter, TzFinderAdapter};
pub use config::AppConfig;
pub use telemetry::init_tracing;
pub use wiring::build_service;
