//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Timezone identifier is not part of the IANA database
    #[error("Invalid timezone identifier: {0}")]
    InvalidZone(String),

    /// Latitude/longitude outside the valid ranges
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// Country name could not be mapped to an ISO 3166-1 alpha-2 code
    #[error("Unknown country name: {0}")]
    InvalidCountry(String),

    /// Date/time parsing error
    #[error("Invalid date/time: {0}")]
    InvalidDateTime(String),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_zone_error_message() {
        let err = DomainError::InvalidZone("Mars/Olympus".to_string());
        assert_eq!(err.to_string(), "Invalid timezone identifier: Mars/Olympus");
    }

    #[test]
    fn invalid_coordinates_error_message() {
        let err = DomainError::InvalidCoordinates;
        assert!(err.to_string().contains("latitude"));
        assert!(err.to_string().contains("longitude"));
    }

    #[test]
    fn invalid_country_error_message() {
        let err = DomainError::InvalidCountry("Atlantis".to_string());
        assert_eq!(err.to_string(), "Unknown country name: Atlantis");
    }

    #[test]
    fn invalid_datetime_error_message() {
        let err = DomainError::InvalidDateTime("not a date".to_string());
        assert_eq!(err.to_string(), "Invalid date/time: not a date");
    }
}
