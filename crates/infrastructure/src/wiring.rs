//! Service assembly
//!
//! Builds a ready `TimeZoneService` from configuration. Providers whose
//! configuration is absent are replaced by a stub that reports itself as
//! unavailable, so the chain degrades past them instead of failing.

use std::net::IpAddr;
use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::{CoordinateZonePort, GazetteerPort, IpGeolocationPort, PlaceSearch};
use application::services::{LocationResolver, TimeZoneService};
use async_trait::async_trait;
use domain::ZoneCatalog;
use domain::entities::CandidatePlace;
use tracing::info;

use crate::adapters::{GazetteerAdapter, IpGeoAdapter, TzFinderAdapter};
use crate::config::AppConfig;

/// Stands in for a provider with no configuration
#[derive(Debug, Clone, Copy)]
struct UnconfiguredProvider(&'static str);

impl UnconfiguredProvider {
    fn err(&self) -> ApplicationError {
        ApplicationError::ExternalService(format!("{} is not configured", self.0))
    }
}

#[async_trait]
impl IpGeolocationPort for UnconfiguredProvider {
    async fn zone_for_ip(&self, _ip: IpAddr) -> Result<Option<String>, ApplicationError> {
        Err(self.err())
    }
}

#[async_trait]
impl GazetteerPort for UnconfiguredProvider {
    async fn search(&self, _search: &PlaceSearch) -> Result<Vec<CandidatePlace>, ApplicationError> {
        Err(self.err())
    }
}

/// Assemble the facade from configuration
///
/// # Errors
///
/// Returns an error when a configured provider's HTTP client cannot be
/// initialized.
pub fn build_service(config: AppConfig) -> Result<TimeZoneService, ApplicationError> {
    let catalog = Arc::new(ZoneCatalog::bundled());

    let ip_geolocation: Arc<dyn IpGeolocationPort> = match config.ipgeo {
        Some(ipgeo) => Arc::new(IpGeoAdapter::new(ipgeo)?),
        None => {
            info!("IP geolocation not configured, strategy disabled");
            Arc::new(UnconfiguredProvider("IP geolocation"))
        },
    };

    let gazetteer: Arc<dyn GazetteerPort> = match config.geonames {
        Some(geonames) => Arc::new(GazetteerAdapter::new(geonames)?),
        None => {
            info!("gazetteer not configured, city strategies disabled");
            Arc::new(UnconfiguredProvider("place search"))
        },
    };

    let coordinate_zones: Arc<dyn CoordinateZonePort> = Arc::new(TzFinderAdapter::new());

    let resolver = LocationResolver::new(
        ip_geolocation,
        coordinate_zones,
        gazetteer,
        Arc::clone(&catalog),
        config.resolver,
    );

    Ok(TimeZoneService::new(resolver, catalog))
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::entities::{LocationQuery, ResolutionSource};

    #[tokio::test]
    async fn test_unconfigured_providers_degrade() {
        let service = build_service(AppConfig::default()).expect("builds");

        let snapshot = service
            .current_time(&LocationQuery::from_ip("8.8.8.8".parse().expect("valid ip")))
            .await;

        assert_eq!(snapshot.source, ResolutionSource::Default);
        assert_eq!(snapshot.zone.as_str(), "UTC");
        assert!(snapshot.warning.is_some());
    }

    #[tokio::test]
    async fn test_coordinates_work_without_any_configuration() {
        let service = build_service(AppConfig::default()).expect("builds");

        let snapshot = service
            .current_time(&LocationQuery::from_coordinates(35.68, 139.69))
            .await;

        assert_eq!(snapshot.zone.as_str(), "Asia/Tokyo");
        assert_eq!(snapshot.source, ResolutionSource::CoordinateLookup);
    }
}
