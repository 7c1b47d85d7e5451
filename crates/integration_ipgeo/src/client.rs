//! GeoLite2 City web service client

use std::net::IpAddr;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::CityResponse;

/// IP geolocation client errors
#[derive(Debug, Error)]
pub enum IpGeoError {
    /// Connection to the geolocation service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the geolocation service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from the geolocation service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Account id or license key rejected
    #[error("Authentication rejected")]
    Unauthorized,

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// IP geolocation service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpGeoConfig {
    /// GeoLite2 web service base URL (default: <https://geolite.info>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// MaxMind account id, used as the basic-auth user
    pub account_id: String,

    /// MaxMind license key, used as the basic-auth password
    pub license_key: String,

    /// Connection timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://geolite.info".to_string()
}

const fn default_timeout() -> u64 {
    30
}

/// Client trait for IP-to-location lookups
#[async_trait]
pub trait IpGeoClient: Send + Sync {
    /// Resolve an IP address to its IANA time zone
    ///
    /// Returns `Ok(None)` when the service does not know the address or
    /// knows it without a time zone.
    async fn time_zone_for(&self, ip: IpAddr) -> Result<Option<String>, IpGeoError>;
}

/// GeoLite2 HTTP client implementation
#[derive(Debug)]
pub struct GeoLiteClient {
    client: Client,
    config: IpGeoConfig,
}

impl GeoLiteClient {
    /// Create a new GeoLite2 client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: IpGeoConfig) -> Result<Self, IpGeoError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| IpGeoError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn city_url(&self, ip: IpAddr) -> String {
        format!("{}/geoip/v2.1/city/{ip}", self.config.base_url)
    }
}

#[async_trait]
impl IpGeoClient for GeoLiteClient {
    #[instrument(skip(self), fields(ip = %ip))]
    async fn time_zone_for(&self, ip: IpAddr) -> Result<Option<String>, IpGeoError> {
        let url = self.city_url(ip);
        debug!(url = %url, "Looking up IP location");

        let response = self
            .client
            .get(&url)
            .basic_auth(&self.config.account_id, Some(&self.config.license_key))
            .send()
            .await
            .map_err(|e| IpGeoError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            // Unknown address is a normal miss
            return Ok(None);
        }
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(IpGeoError::Unauthorized);
        }
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(IpGeoError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(IpGeoError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(IpGeoError::RequestFailed(format!("HTTP {status}")));
        }

        let city: CityResponse = response
            .json()
            .await
            .map_err(|e| IpGeoError::ParseError(e.to_string()))?;

        Ok(city.location.and_then(|l| l.time_zone))
    }
}
