//! Zone metadata service
//!
//! Computes the offset and DST state of a zone for a calendar day. All
//! evaluation happens at local noon of the reference date, which keeps the
//! answer stable even when the day itself contains a transition.

use std::sync::Arc;

use chrono::{Duration, NaiveDate, NaiveTime};
use chrono_tz::OffsetComponents;
use domain::ZoneCatalog;
use domain::entities::{ZoneMetadata, offset_string};
use domain::value_objects::Timezone;
use tracing::instrument;

use crate::datetime_parser::resolve_wall_clock;
use crate::error::ApplicationError;

/// Builds per-day display metadata for zones
#[derive(Debug, Clone)]
pub struct ZoneMetadataBuilder {
    catalog: Arc<ZoneCatalog>,
}

impl ZoneMetadataBuilder {
    /// Create a builder over the given catalog
    #[must_use]
    pub const fn new(catalog: Arc<ZoneCatalog>) -> Self {
        Self { catalog }
    }

    /// Metadata for a zone identifier on a calendar day
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::InvalidZone` for identifiers the IANA
    /// database does not know.
    #[instrument(skip(self))]
    pub fn metadata_for(
        &self,
        id: &str,
        reference_date: NaiveDate,
    ) -> Result<ZoneMetadata, ApplicationError> {
        let zone = self
            .catalog
            .validate(id)
            .ok_or_else(|| ApplicationError::InvalidZone(id.to_string()))?;
        Ok(self.metadata_for_zone(zone, reference_date))
    }

    /// Metadata for an already validated zone on a calendar day
    #[must_use]
    pub fn metadata_for_zone(&self, zone: Timezone, reference_date: NaiveDate) -> ZoneMetadata {
        let noon = reference_date.and_time(NaiveTime::MIN) + Duration::hours(12);
        // Noon itself can land in a gap (Pacific/Apia skipped an entire
        // day in 2011); resolve_wall_clock absorbs that.
        let (at_noon, _) = resolve_wall_clock(zone.tz(), noon);

        let offset = at_noon.offset();
        let utc_offset_minutes =
            i32::try_from((offset.base_utc_offset() + offset.dst_offset()).num_minutes())
                .unwrap_or(0);
        let is_dst = !offset.dst_offset().is_zero();
        let abbreviation = at_noon.format("%Z").to_string();

        ZoneMetadata {
            zone,
            reference_date,
            utc_offset_minutes,
            offset_string: offset_string(utc_offset_minutes),
            abbreviation,
            is_dst,
            long_name: self.catalog.long_name(&zone),
        }
    }
}
