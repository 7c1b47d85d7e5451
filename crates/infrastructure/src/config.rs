//! Application configuration

use application::services::ResolverConfig;
use integration_geonames::GeoNamesConfig;
use integration_ipgeo::IpGeoConfig;
use serde::{Deserialize, Serialize};

/// Top-level configuration for the resolution stack
///
/// Provider sections are optional; a missing section disables that
/// strategy and the chain degrades past it with a warning.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// GeoLite2 IP geolocation credentials and endpoint
    #[serde(default)]
    pub ipgeo: Option<IpGeoConfig>,

    /// GeoNames gazetteer account and endpoint
    #[serde(default)]
    pub geonames: Option<GeoNamesConfig>,

    /// Fallback-chain tuning
    #[serde(default)]
    pub resolver: ResolverConfig,
}

impl AppConfig {
    /// Parse configuration from a JSON document
    ///
    /// # Errors
    ///
    /// Returns the underlying deserialization error on malformed input.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
