//! Embedded coordinate-to-timezone lookup
//!
//! Wraps the pre-compiled boundary data shipped with `tzf-rs`. No network
//! access; the finder is built once per process and shared.

use std::sync::OnceLock;

use tracing::debug;
use tzf_rs::DefaultFinder;

// Building DefaultFinder decompresses the boundary set, so share one
static FINDER: OnceLock<DefaultFinder> = OnceLock::new();

/// Coordinate-to-timezone finder backed by embedded boundary data
#[derive(Debug, Clone, Copy, Default)]
pub struct TzFinder;

impl TzFinder {
    /// Create a finder handle
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Every IANA zone covering the coordinate
    ///
    /// Empty for unassigned areas such as open ocean. Boundary overlaps
    /// near borders can yield more than one zone.
    #[must_use]
    pub fn zones_at(&self, latitude: f64, longitude: f64) -> Vec<String> {
        let finder = FINDER.get_or_init(DefaultFinder::new);
        // tzf-rs takes longitude first
        let names: Vec<String> = finder
            .get_tz_names(longitude, latitude)
            .into_iter()
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect();
        debug!(latitude, longitude, zones = names.len(), "coordinate lookup");
        names
    }

    /// The best single IANA zone for the coordinate, if any
    #[must_use]
    pub fn zone_at(&self, latitude: f64, longitude: f64) -> Option<String> {
        let finder = FINDER.get_or_init(DefaultFinder::new);
        let name = finder.get_tz_name(longitude, latitude);
        if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_berlin_resolves() {
        let zones = TzFinder::new().zones_at(52.52, 13.40);
        assert!(zones.contains(&"Europe/Berlin".to_string()));
    }

    #[test]
    fn test_single_zone_lookup() {
        let zone = TzFinder::new().zone_at(35.68, 139.69);
        assert_eq!(zone.as_deref(), Some("Asia/Tokyo"));
    }

    #[test]
    fn test_open_ocean_is_empty() {
        // Mid-Pacific, far from any land boundary
        let zone = TzFinder::new().zone_at(0.0, -140.0);
        assert!(zone.is_none() || zone.as_deref().is_some_and(|z| z.starts_with("Etc/")));
    }

    #[test]
    fn test_latitude_longitude_argument_order() {
        // New York: lat 40.7, lon -74.0; swapping them would miss land
        let zones = TzFinder::new().zones_at(40.7, -74.0);
        assert!(zones.contains(&"America/New_York".to_string()));
    }
}
