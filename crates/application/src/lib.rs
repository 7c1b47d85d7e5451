//! Application layer - Use cases and orchestration
//!
//! Contains the resolution and conversion services, the port definitions
//! for the external providers, and the parsing helpers they share.
//! Orchestrates domain objects and infrastructure adapters.

pub mod datetime_parser;
pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
