//! Coordinate-to-zone port
//!
//! Defines the interface for resolving a coordinate pair to the IANA zones
//! covering it.

use async_trait::async_trait;
use domain::value_objects::GeoLocation;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for coordinate-to-zone lookups
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CoordinateZonePort: Send + Sync {
    /// Zones covering the given location
    ///
    /// The list is empty for unassigned areas such as open ocean.
    async fn zones_at(&self, location: &GeoLocation) -> Result<Vec<String>, ApplicationError>;
}
