//! Facade over resolution, conversion, and formatting
//!
//! This is the surface a transport layer consumes. It wires the resolver
//! to live clock metadata and delegates conversion and formatting to the
//! converter.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use domain::ZoneCatalog;
use domain::entities::{
    ConversionOutcome, FormattedTime, LocationQuery, ResolutionSource, ZonedView,
};
use domain::value_objects::Timezone;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::ApplicationError;
use crate::services::location_resolver::{LocationResolver, LookupOutcome};
use crate::services::time_conversion::TimeConverter;

/// The current moment in a resolved zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentTimeSnapshot {
    /// The resolved zone
    pub zone: Timezone,
    /// Display name of the zone
    pub long_name: String,
    /// Strategy that produced the zone
    pub source: ResolutionSource,
    /// Caveats accumulated while resolving
    pub warning: Option<String>,
    /// The moment in UTC, ISO-8601
    pub utc_iso: String,
    /// The moment as unix milliseconds
    pub unix_timestamp_ms: i64,
    /// The moment projected into the resolved zone
    pub local: ZonedView,
}

/// Facade bundling the resolver, converter, and catalog
pub struct TimeZoneService {
    resolver: LocationResolver,
    converter: TimeConverter,
    catalog: Arc<ZoneCatalog>,
}

impl std::fmt::Debug for TimeZoneService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimeZoneService")
            .field("resolver", &self.resolver)
            .finish_non_exhaustive()
    }
}

impl TimeZoneService {
    /// Create the facade over an already wired resolver
    #[must_use]
    pub fn new(resolver: LocationResolver, catalog: Arc<ZoneCatalog>) -> Self {
        Self {
            resolver,
            converter: TimeConverter::new(Arc::clone(&catalog)),
            catalog,
        }
    }

    /// Resolve a location and report the current time there
    pub async fn current_time(&self, query: &LocationQuery) -> CurrentTimeSnapshot {
        self.current_time_at(query, Utc::now()).await
    }

    /// Resolve a location and report a given moment there
    ///
    /// Split out from [`Self::current_time`] so tests can pin the clock.
    #[instrument(skip(self))]
    pub async fn current_time_at(
        &self,
        query: &LocationQuery,
        now: DateTime<Utc>,
    ) -> CurrentTimeSnapshot {
        let outcome = self.resolver.resolve(query).await;
        let local = self.converter.zoned_view(now, outcome.zone);

        CurrentTimeSnapshot {
            zone: outcome.zone,
            long_name: self.catalog.long_name(&outcome.zone),
            source: outcome.source,
            warning: outcome.warning,
            utc_iso: now.to_rfc3339(),
            unix_timestamp_ms: now.timestamp_millis(),
            local,
        }
    }

    /// Resolve a location to every matching zone for a calendar day
    pub async fn lookup(&self, query: &LocationQuery, reference_date: NaiveDate) -> LookupOutcome {
        self.resolver.resolve_lookup(query, reference_date).await
    }

    /// Convert a date/time string into a target zone
    ///
    /// # Errors
    ///
    /// See [`TimeConverter::convert`].
    pub fn convert_time(
        &self,
        date_time: &str,
        source_zone: Option<&str>,
        target_zone: &str,
    ) -> Result<ConversionOutcome, ApplicationError> {
        self.converter.convert(date_time, source_zone, target_zone)
    }

    /// Render a date/time string in a display zone
    ///
    /// # Errors
    ///
    /// See [`TimeConverter::format`].
    pub fn format_time(
        &self,
        date_time: &str,
        display_zone: &str,
        format_spec: &str,
        locale: Option<&str>,
    ) -> Result<FormattedTime, ApplicationError> {
        self.converter
            .format(date_time, display_zone, format_spec, locale)
    }
}
