//! GeoNames search client

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{PlaceRecord, SearchResponse};

// GeoNames status codes signalling credit exhaustion
const RATE_LIMIT_CODES: [u32; 3] = [18, 19, 20];
const AUTH_ERROR_CODE: u32 = 10;

/// GeoNames client errors
#[derive(Debug, Error)]
pub enum GeoNamesError {
    /// Connection to the gazetteer failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the gazetteer failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from the gazetteer
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Username rejected by the service
    #[error("Authentication rejected: {0}")]
    Unauthorized(String),

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Daily or hourly credit limit exhausted
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),
}

/// GeoNames service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoNamesConfig {
    /// GeoNames API base URL (default: <http://api.geonames.org>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Registered GeoNames username
    pub username: String,

    /// Connection timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Maximum rows per search (default: 30)
    #[serde(default = "default_max_rows")]
    pub max_rows: u8,
}

fn default_base_url() -> String {
    "http://api.geonames.org".to_string()
}

const fn default_timeout() -> u64 {
    30
}

const fn default_max_rows() -> u8 {
    30
}

/// Parameters for an exact-name place search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceQuery {
    /// Exact place name to match
    pub name: String,
    /// ISO alpha-2 country filter
    pub country: Option<String>,
    /// Order results by population instead of relevance
    pub order_by_population: bool,
}

/// Client trait for gazetteer place search
#[async_trait]
pub trait GazetteerClient: Send + Sync {
    /// Search for places matching the query
    async fn search(&self, query: &PlaceQuery) -> Result<Vec<PlaceRecord>, GeoNamesError>;
}

/// GeoNames HTTP client implementation
#[derive(Debug)]
pub struct GeoNamesClient {
    client: Client,
    config: GeoNamesConfig,
}

impl GeoNamesClient {
    /// Create a new GeoNames client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: GeoNamesConfig) -> Result<Self, GeoNamesError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GeoNamesError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn search_params(&self, query: &PlaceQuery) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("name_equals", query.name.clone()),
            // Populated places and administrative areas only
            ("featureClass", "P".to_string()),
            ("featureClass", "A".to_string()),
            ("maxRows", self.config.max_rows.to_string()),
            ("style", "FULL".to_string()),
            ("username", self.config.username.clone()),
        ];
        if query.order_by_population {
            params.push(("orderby", "population".to_string()));
        }
        if let Some(country) = &query.country {
            params.push(("country", country.clone()));
        }
        params
    }
}

#[async_trait]
impl GazetteerClient for GeoNamesClient {
    #[instrument(skip(self), fields(name = %query.name))]
    async fn search(&self, query: &PlaceQuery) -> Result<Vec<PlaceRecord>, GeoNamesError> {
        let url = format!("{}/searchJSON", self.config.base_url);
        debug!(url = %url, "Searching gazetteer");

        let response = self
            .client
            .get(&url)
            .query(&self.search_params(query))
            .send()
            .await
            .map_err(|e| GeoNamesError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status.is_server_error() {
            return Err(GeoNamesError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(GeoNamesError::RequestFailed(format!("HTTP {status}")));
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| GeoNamesError::ParseError(e.to_string()))?;

        // Errors arrive as HTTP 200 with a status block
        if let Some(status) = body.status {
            if status.value == AUTH_ERROR_CODE {
                return Err(GeoNamesError::Unauthorized(status.message));
            }
            if RATE_LIMIT_CODES.contains(&status.value) {
                return Err(GeoNamesError::RateLimitExceeded(status.message));
            }
            return Err(GeoNamesError::RequestFailed(status.message));
        }

        Ok(body.geonames.into_iter().map(PlaceRecord::from).collect())
    }
}
