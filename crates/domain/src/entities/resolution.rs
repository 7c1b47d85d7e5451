//! Resolution outcome entities

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::Timezone;

/// Which fallback strategy produced a resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionSource {
    /// IP geolocation provider
    IpGeolocation,
    /// Coordinate-to-zone database
    CoordinateLookup,
    /// Coordinates fell in unassigned territory, defaulted to `Etc/GMT`
    CoordinateLookupDefault,
    /// Gazetteer match on city filtered by country
    CityCountryLookup,
    /// Gazetteer match on city alone, most populous first
    CityLookup,
    /// Most populous zone of the resolved country
    CountryLookupSingle,
    /// Every distinct zone of the resolved country
    CountryLookupMulti,
    /// No strategy matched, defaulted to UTC
    Default,
}

impl ResolutionSource {
    /// Human-readable provenance label
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::IpGeolocation => "IP Geolocation",
            Self::CoordinateLookup => "Coordinate Lookup",
            Self::CoordinateLookupDefault => "Coordinate Lookup (Default)",
            Self::CityCountryLookup => "City + Country Lookup",
            Self::CityLookup => "City Lookup (Highest Population)",
            Self::CountryLookupSingle => "Country Lookup (Most Populous Zone)",
            Self::CountryLookupMulti => "Country Lookup (Multiple Time Zones)",
            Self::Default => "Default",
        }
    }
}

impl fmt::Display for ResolutionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// The result of running the fallback chain in single-best mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolutionOutcome {
    /// Resolved zone, always catalog-valid
    pub zone: Timezone,
    /// Strategy that produced the zone
    pub source: ResolutionSource,
    /// Caveat attached to degraded or defaulted outcomes
    pub warning: Option<String>,
}

impl ResolutionOutcome {
    /// An outcome with no caveat
    #[must_use]
    pub const fn new(zone: Timezone, source: ResolutionSource) -> Self {
        Self {
            zone,
            source,
            warning: None,
        }
    }

    /// Attach a warning to this outcome
    #[must_use]
    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warning = Some(warning.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_descriptions() {
        assert_eq!(ResolutionSource::IpGeolocation.to_string(), "IP Geolocation");
        assert_eq!(
            ResolutionSource::CountryLookupMulti.to_string(),
            "Country Lookup (Multiple Time Zones)"
        );
    }

    #[test]
    fn test_outcome_with_warning() {
        let outcome = ResolutionOutcome::new(Timezone::utc(), ResolutionSource::Default)
            .with_warning("no input could be resolved");
        assert_eq!(outcome.warning.as_deref(), Some("no input could be resolved"));
    }

    #[test]
    fn test_source_serde_snake_case() {
        let json = serde_json::to_string(&ResolutionSource::CityCountryLookup).expect("serialize");
        assert_eq!(json, "\"city_country_lookup\"");
    }
}
