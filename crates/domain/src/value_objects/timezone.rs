//! Timezone value object

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// A validated IANA timezone identifier
///
/// Wraps [`chrono_tz::Tz`], so a constructed value is always a zone the
/// IANA database knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Timezone(Tz);

impl Timezone {
    /// Parse and validate an IANA zone identifier
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidZone` if the identifier is not part of
    /// the IANA database.
    pub fn parse(id: &str) -> Result<Self, DomainError> {
        id.parse::<Tz>()
            .map(Self)
            .map_err(|_| DomainError::InvalidZone(id.to_string()))
    }

    /// Get the canonical IANA identifier
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        self.0.name()
    }

    /// Get the underlying `chrono_tz` zone
    #[must_use]
    pub const fn tz(&self) -> Tz {
        self.0
    }

    /// Check if this is a UTC-equivalent zone
    #[must_use]
    pub fn is_utc(&self) -> bool {
        matches!(self.as_str(), "UTC" | "Etc/UTC" | "Etc/GMT")
    }

    /// UTC timezone
    #[must_use]
    pub const fn utc() -> Self {
        Self(Tz::UTC)
    }

    /// The fixed `Etc/GMT` zone used for unassigned areas (open ocean)
    #[must_use]
    pub const fn gmt() -> Self {
        Self(Tz::Etc__GMT)
    }
}

impl Default for Timezone {
    fn default() -> Self {
        Self::utc()
    }
}

impl fmt::Display for Timezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<Tz> for Timezone {
    fn from(tz: Tz) -> Self {
        Self(tz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_zone() {
        let tz = Timezone::parse("Europe/Paris").expect("valid zone");
        assert_eq!(tz.as_str(), "Europe/Paris");
    }

    #[test]
    fn test_parse_invalid_zone() {
        let err = Timezone::parse("Not/AZone").expect_err("invalid zone");
        assert!(matches!(err, DomainError::InvalidZone(_)));
    }

    #[test]
    fn test_default_is_utc() {
        assert_eq!(Timezone::default().as_str(), "UTC");
    }

    #[test]
    fn test_is_utc() {
        assert!(Timezone::utc().is_utc());
        assert!(Timezone::gmt().is_utc());
        assert!(Timezone::parse("Etc/UTC").expect("valid").is_utc());
        assert!(!Timezone::parse("Europe/Berlin").expect("valid").is_utc());
    }

    #[test]
    fn test_display() {
        let tz = Timezone::parse("America/New_York").expect("valid");
        assert_eq!(format!("{tz}"), "America/New_York");
    }

    #[test]
    fn test_serialization_round_trip() {
        let tz = Timezone::parse("Asia/Tokyo").expect("valid");
        let json = serde_json::to_string(&tz).expect("serialize");
        assert!(json.contains("Asia/Tokyo"));

        let deserialized: Timezone = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(tz, deserialized);
    }
}
