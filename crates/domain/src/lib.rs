//! Domain layer for ZoneAtlas
//!
//! Contains the zone catalog, value objects, request-scoped entities and
//! domain errors. This layer performs no I/O and defines the ubiquitous
//! language for timezone resolution.

pub mod catalog;
pub mod entities;
pub mod errors;
pub mod value_objects;

pub use catalog::{CountryZone, ZoneCatalog};
pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
