//! Location query entity

use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// A partial, possibly-ambiguous description of "where"
///
/// At least one field should be present; latitude and longitude always
/// travel as a pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationQuery {
    /// Requesting or explicitly supplied IP address
    pub ip: Option<IpAddr>,
    /// Raw coordinate pair, validated by the coordinate strategy
    pub coordinates: Option<(f64, f64)>,
    /// City name, possibly hyphen-separated
    pub city: Option<String>,
    /// Country name, possibly hyphen-separated
    pub country: Option<String>,
}

impl LocationQuery {
    /// A query with only an IP address
    #[must_use]
    pub fn from_ip(ip: IpAddr) -> Self {
        Self {
            ip: Some(ip),
            ..Self::default()
        }
    }

    /// A query with only a coordinate pair
    #[must_use]
    pub fn from_coordinates(lat: f64, lon: f64) -> Self {
        Self {
            coordinates: Some((lat, lon)),
            ..Self::default()
        }
    }

    /// A query with a city and optional country
    #[must_use]
    pub fn from_place(city: Option<&str>, country: Option<&str>) -> Self {
        Self {
            city: city.map(str::to_string),
            country: country.map(str::to_string),
            ..Self::default()
        }
    }

    /// True when no field is set at all
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.ip.is_none()
            && self.coordinates.is_none()
            && self.city.is_none()
            && self.country.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query() {
        assert!(LocationQuery::default().is_empty());
    }

    #[test]
    fn test_from_ip() {
        let query = LocationQuery::from_ip("8.8.8.8".parse().expect("valid ip"));
        assert!(!query.is_empty());
        assert!(query.ip.is_some());
        assert!(query.coordinates.is_none());
    }

    #[test]
    fn test_from_place() {
        let query = LocationQuery::from_place(Some("Paris"), Some("France"));
        assert_eq!(query.city.as_deref(), Some("Paris"));
        assert_eq!(query.country.as_deref(), Some("France"));
    }
}
