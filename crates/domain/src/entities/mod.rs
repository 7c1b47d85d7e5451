//! Request-scoped entities
//!
//! All entities here are immutable once constructed and live for a single
//! request only.

mod conversion;
mod place;
mod query;
mod resolution;
mod zone_metadata;

pub use conversion::{ConversionOutcome, FormattedTime, SourceInterpretation, ZonedView};
pub use place::CandidatePlace;
pub use query::LocationQuery;
pub use resolution::{ResolutionOutcome, ResolutionSource};
pub use zone_metadata::{ZoneMetadata, offset_string};
