//! GeoNames search web service response models

use serde::{Deserialize, Serialize};

/// Top-level response of `GET /searchJSON`
///
/// GeoNames signals errors with HTTP 200 plus a `status` block, so both
/// shapes live in one struct.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Matching places, possibly empty
    #[serde(default)]
    pub geonames: Vec<GeoName>,
    /// Present only on service-level errors
    #[serde(default)]
    pub status: Option<ServiceStatus>,
}

/// Service-level error block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceStatus {
    /// Human-readable error message
    #[serde(default)]
    pub message: String,
    /// GeoNames error code
    #[serde(default)]
    pub value: u32,
}

/// One place as the service reports it
///
/// Coordinates arrive as strings in the wire format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoName {
    /// Place name
    pub name: String,
    /// Latitude, stringly typed on the wire
    #[serde(default)]
    pub lat: String,
    /// Longitude, stringly typed on the wire
    #[serde(default)]
    pub lng: String,
    /// Population, zero when unknown
    #[serde(default)]
    pub population: u64,
    /// Feature code such as `PPLC` or `PPLA2`
    #[serde(default)]
    pub fcode: String,
    /// Relevance score assigned by the search engine
    #[serde(default)]
    pub score: f64,
    /// Time zone block of the place
    #[serde(default)]
    pub timezone: Option<GeoNameTimezone>,
}

/// Time zone block of a place
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoNameTimezone {
    /// IANA zone identifier
    #[serde(rename = "timeZoneId", default)]
    pub time_zone_id: Option<String>,
}

/// A place with the wire quirks stripped away
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceRecord {
    /// Place name
    pub name: String,
    /// Latitude
    pub latitude: f64,
    /// Longitude
    pub longitude: f64,
    /// Population, zero when unknown
    pub population: u64,
    /// Feature code such as `PPLC` or `PPLA2`
    pub feature_code: String,
    /// Relevance score assigned by the search engine
    pub score: f64,
    /// IANA zone identifier of the place, when known
    pub time_zone: Option<String>,
}

impl From<GeoName> for PlaceRecord {
    fn from(raw: GeoName) -> Self {
        Self {
            latitude: raw.lat.parse().unwrap_or_default(),
            longitude: raw.lng.parse().unwrap_or_default(),
            name: raw.name,
            population: raw.population,
            feature_code: raw.fcode,
            score: raw.score,
            time_zone: raw.timezone.and_then(|t| t.time_zone_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_search_hit() {
        let json = r#"{
            "totalResultsCount": 1,
            "geonames": [{
                "name": "Chicago",
                "lat": "41.85003",
                "lng": "-87.65005",
                "geonameId": 4887398,
                "countryCode": "US",
                "population": 2695598,
                "fcl": "P",
                "fcode": "PPLA2",
                "score": 31.96,
                "timezone": { "gmtOffset": -6, "timeZoneId": "America/Chicago", "dstOffset": -5 }
            }]
        }"#;
        let response: SearchResponse = serde_json::from_str(json).expect("deserialize");
        assert!(response.status.is_none());

        let record = PlaceRecord::from(response.geonames[0].clone());
        assert_eq!(record.name, "Chicago");
        assert!((record.latitude - 41.85003).abs() < 1e-9);
        assert_eq!(record.population, 2_695_598);
        assert_eq!(record.feature_code, "PPLA2");
        assert_eq!(record.time_zone.as_deref(), Some("America/Chicago"));
    }

    #[test]
    fn test_deserializes_error_status() {
        let json = r#"{ "status": { "message": "user does not exist.", "value": 10 } }"#;
        let response: SearchResponse = serde_json::from_str(json).expect("deserialize");
        let status = response.status.expect("status present");
        assert_eq!(status.value, 10);
        assert!(response.geonames.is_empty());
    }

    #[test]
    fn test_unparseable_coordinates_default_to_zero() {
        let raw = GeoName {
            name: "Nowhere".to_string(),
            lat: "not-a-number".to_string(),
            lng: String::new(),
            population: 0,
            fcode: "PPL".to_string(),
            score: 0.0,
            timezone: None,
        };
        let record = PlaceRecord::from(raw);
        assert!((record.latitude).abs() < f64::EPSILON);
        assert!((record.longitude).abs() < f64::EPSILON);
    }
}
