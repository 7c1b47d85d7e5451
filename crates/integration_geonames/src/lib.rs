//! GeoNames gazetteer integration
//!
//! Client for the GeoNames search web service (<https://www.geonames.org>).
//! Performs exact-name place search restricted to populated and
//! administrative feature classes, with per-place time zone data.

pub mod client;
mod models;

pub use client::{GazetteerClient, GeoNamesClient, GeoNamesConfig, GeoNamesError, PlaceQuery};
pub use models::{GeoName, PlaceRecord, SearchResponse};
