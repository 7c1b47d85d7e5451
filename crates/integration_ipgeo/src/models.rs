//! GeoLite2 City web service response models

use serde::{Deserialize, Serialize};

/// Top-level response of `GET /geoip/v2.1/city/{ip}`
///
/// Only the location block is consumed; the service returns far more.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityResponse {
    /// Geographic location of the address, when known
    #[serde(default)]
    pub location: Option<IpLocation>,
}

/// Location block of a city response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpLocation {
    /// Latitude of the address
    #[serde(default)]
    pub latitude: Option<f64>,
    /// Longitude of the address
    #[serde(default)]
    pub longitude: Option<f64>,
    /// IANA time zone of the address
    #[serde(default)]
    pub time_zone: Option<String>,
}
