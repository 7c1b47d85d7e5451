//! Coordinate-to-zone adapter - Implements CoordinateZonePort using integration_tzfinder

use application::error::ApplicationError;
use application::ports::CoordinateZonePort;
use async_trait::async_trait;
use domain::value_objects::GeoLocation;
use integration_tzfinder::TzFinder;
use tracing::{debug, instrument};

/// Adapter for coordinate lookups over the embedded boundary data
#[derive(Debug, Clone, Copy, Default)]
pub struct TzFinderAdapter {
    finder: TzFinder,
}

impl TzFinderAdapter {
    /// Create a new adapter
    #[must_use]
    pub const fn new() -> Self {
        Self {
            finder: TzFinder::new(),
        }
    }
}

#[async_trait]
impl CoordinateZonePort for TzFinderAdapter {
    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude()))]
    async fn zones_at(&self, location: &GeoLocation) -> Result<Vec<String>, ApplicationError> {
        let zones: Vec<String> = self
            .finder
            .zones_at(location.latitude(), location.longitude())
            .into_iter()
            // The boundary data labels open ocean with Etc/GMT offsets;
            // the resolver treats no-land as unassigned territory
            .filter(|zone| !zone.starts_with("Etc/"))
            .collect();
        debug!(zones = zones.len(), "coordinate zones resolved");
        Ok(zones)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_land_coordinates_resolve() {
        let adapter = TzFinderAdapter::new();
        let location = GeoLocation::new(48.8566, 2.3522).expect("valid coordinates");
        let zones = adapter.zones_at(&location).await.expect("lookup works");
        assert!(zones.contains(&"Europe/Paris".to_string()));
    }

    #[tokio::test]
    async fn test_open_ocean_is_empty() {
        let adapter = TzFinderAdapter::new();
        let location = GeoLocation::new(0.0, -140.0).expect("valid coordinates");
        let zones = adapter.zones_at(&location).await.expect("lookup works");
        assert!(zones.is_empty());
    }
}
