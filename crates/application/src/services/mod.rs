//! Application services
//!
//! Services orchestrate the location providers behind the ports and the
//! zone catalog to implement resolution, conversion, and formatting.

pub mod location_resolver;
pub mod place_ranker;
pub mod time_conversion;
pub mod timezone_service;
pub mod zone_metadata;

pub use location_resolver::{
    LocationResolver, LookupEntry, LookupOutcome, ResolverConfig,
};
pub use place_ranker::PlaceRanker;
pub use time_conversion::{FormatPreset, TimeConverter};
pub use timezone_service::{CurrentTimeSnapshot, TimeZoneService};
pub use zone_metadata::ZoneMetadataBuilder;
