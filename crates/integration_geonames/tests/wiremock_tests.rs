//! Integration tests for the GeoNames client using wiremock
//!
//! These tests verify the client's behavior against a mock HTTP server,
//! including the service's habit of reporting errors inside an HTTP 200.

use integration_geonames::{
    GazetteerClient, GeoNamesClient, GeoNamesConfig, GeoNamesError, PlaceQuery,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

fn sample_search_response() -> serde_json::Value {
    serde_json::json!({
        "totalResultsCount": 2,
        "geonames": [
            {
                "name": "Springfield",
                "lat": "39.80172",
                "lng": "-89.64371",
                "geonameId": 4250542,
                "countryCode": "US",
                "population": 116250,
                "fcl": "P",
                "fcode": "PPLA",
                "score": 28.5,
                "timezone": { "gmtOffset": -6, "timeZoneId": "America/Chicago", "dstOffset": -5 }
            },
            {
                "name": "Springfield",
                "lat": "42.10148",
                "lng": "-72.58981",
                "geonameId": 4951788,
                "countryCode": "US",
                "population": 154341,
                "fcl": "P",
                "fcode": "PPL",
                "score": 27.9,
                "timezone": { "gmtOffset": -5, "timeZoneId": "America/New_York", "dstOffset": -4 }
            }
        ]
    })
}

/// Create a test client configured to use the mock server
///
/// # Panics
///
/// Panics if the client cannot be created (should not happen in tests).
fn create_test_client(mock_server: &MockServer) -> GeoNamesClient {
    let config = GeoNamesConfig {
        base_url: mock_server.uri(),
        username: "testuser".to_string(),
        timeout_secs: 5,
        max_rows: 30,
    };
    #[allow(clippy::expect_used)]
    GeoNamesClient::new(config).expect("Failed to create client")
}

fn query(name: &str) -> PlaceQuery {
    PlaceQuery {
        name: name.to_string(),
        country: None,
        order_by_population: false,
    }
}

#[tokio::test]
async fn test_search_maps_places() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/searchJSON"))
        .and(query_param("name_equals", "Springfield"))
        .and(query_param("username", "testuser"))
        .and(query_param("style", "FULL"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_search_response()))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let places = client
        .search(&query("Springfield"))
        .await
        .expect("search works");

    assert_eq!(places.len(), 2);
    assert_eq!(places[0].name, "Springfield");
    assert_eq!(places[0].feature_code, "PPLA");
    assert_eq!(places[0].time_zone.as_deref(), Some("America/Chicago"));
    assert!((places[1].latitude - 42.10148).abs() < 1e-9);
}

#[tokio::test]
async fn test_search_forwards_country_filter() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/searchJSON"))
        .and(query_param("country", "US"))
        .and(query_param("orderby", "population"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_search_response()))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let places = client
        .search(&PlaceQuery {
            name: "Springfield".to_string(),
            country: Some("US".to_string()),
            order_by_population: true,
        })
        .await
        .expect("search works");

    assert_eq!(places.len(), 2);
}

#[tokio::test]
async fn test_no_matches_is_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "totalResultsCount": 0,
            "geonames": []
        })))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let places = client
        .search(&query("Xyzzyville"))
        .await
        .expect("empty result is ok");

    assert!(places.is_empty());
}

#[tokio::test]
async fn test_auth_error_inside_http_200() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": { "message": "user does not exist.", "value": 10 }
        })))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let err = client
        .search(&query("Paris"))
        .await
        .expect_err("auth error must fail");

    assert!(matches!(err, GeoNamesError::Unauthorized(_)));
}

#[tokio::test]
async fn test_credit_limit_inside_http_200() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": { "message": "the hourly limit has been exceeded.", "value": 19 }
        })))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let err = client
        .search(&query("Paris"))
        .await
        .expect_err("credit limit must fail");

    assert!(matches!(err, GeoNamesError::RateLimitExceeded(_)));
}

#[tokio::test]
async fn test_server_error_reported() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let err = client
        .search(&query("Paris"))
        .await
        .expect_err("502 must fail");

    assert!(matches!(err, GeoNamesError::ServiceUnavailable(_)));
}
