//! Integration tests for the GeoLite2 client using wiremock
//!
//! These tests verify the client's behavior against a mock HTTP server,
//! ensuring proper handling of hits, misses, and error responses.

use integration_ipgeo::{GeoLiteClient, IpGeoClient, IpGeoConfig, IpGeoError};
use std::net::IpAddr;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{basic_auth, method, path},
};

fn sample_city_response() -> serde_json::Value {
    serde_json::json!({
        "city": { "names": { "en": "Mountain View" } },
        "country": { "iso_code": "US", "names": { "en": "United States" } },
        "location": {
            "accuracy_radius": 1000,
            "latitude": 37.386,
            "longitude": -122.0838,
            "time_zone": "America/Los_Angeles"
        }
    })
}

/// Create a test client configured to use the mock server
///
/// # Panics
///
/// Panics if the client cannot be created (should not happen in tests).
fn create_test_client(mock_server: &MockServer) -> GeoLiteClient {
    let config = IpGeoConfig {
        base_url: mock_server.uri(),
        account_id: "123456".to_string(),
        license_key: "test-key".to_string(),
        timeout_secs: 5,
    };
    #[allow(clippy::expect_used)]
    GeoLiteClient::new(config).expect("Failed to create client")
}

fn test_ip() -> IpAddr {
    #[allow(clippy::expect_used)]
    "8.8.8.8".parse().expect("valid ip")
}

#[tokio::test]
async fn test_lookup_returns_time_zone() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geoip/v2.1/city/8.8.8.8"))
        .and(basic_auth("123456", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_city_response()))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let zone = client.time_zone_for(test_ip()).await.expect("lookup works");

    assert_eq!(zone.as_deref(), Some("America/Los_Angeles"));
}

#[tokio::test]
async fn test_unknown_address_is_a_miss() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "code": "IP_ADDRESS_NOT_FOUND",
            "error": "The supplied IP address is not in the database."
        })))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let zone = client.time_zone_for(test_ip()).await.expect("miss is ok");

    assert!(zone.is_none());
}

#[tokio::test]
async fn test_location_without_zone_is_a_miss() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "location": { "latitude": 0.0, "longitude": 0.0 }
        })))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let zone = client.time_zone_for(test_ip()).await.expect("lookup works");

    assert!(zone.is_none());
}

#[tokio::test]
async fn test_bad_credentials_fail() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let err = client
        .time_zone_for(test_ip())
        .await
        .expect_err("401 must fail");

    assert!(matches!(err, IpGeoError::Unauthorized));
}

#[tokio::test]
async fn test_rate_limit_reported() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let err = client
        .time_zone_for(test_ip())
        .await
        .expect_err("429 must fail");

    assert!(matches!(err, IpGeoError::RateLimitExceeded));
}

#[tokio::test]
async fn test_server_error_reported() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let err = client
        .time_zone_for(test_ip())
        .await
        .expect_err("503 must fail");

    assert!(matches!(err, IpGeoError::ServiceUnavailable(_)));
}

#[tokio::test]
async fn test_malformed_body_is_a_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let err = client
        .time_zone_for(test_ip())
        .await
        .expect_err("garbage must fail");

    assert!(matches!(err, IpGeoError::ParseError(_)));
}
