//! IP geolocation adapter - Implements IpGeolocationPort using integration_ipgeo

use std::net::IpAddr;

use application::error::ApplicationError;
use application::ports::IpGeolocationPort;
use async_trait::async_trait;
use integration_ipgeo::{GeoLiteClient, IpGeoClient, IpGeoConfig, IpGeoError};
use tracing::{debug, instrument};

/// Adapter for IP geolocation using the GeoLite2 web service
pub struct IpGeoAdapter {
    client: GeoLiteClient,
}

impl std::fmt::Debug for IpGeoAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IpGeoAdapter")
            .field("client", &"GeoLiteClient")
            .finish()
    }
}

impl IpGeoAdapter {
    /// Create an adapter with the given service configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: IpGeoConfig) -> Result<Self, ApplicationError> {
        let client =
            GeoLiteClient::new(config).map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    fn map_error(err: IpGeoError) -> ApplicationError {
        match err {
            IpGeoError::ConnectionFailed(e) | IpGeoError::RequestFailed(e) => {
                ApplicationError::ExternalService(e)
            },
            IpGeoError::ParseError(e) => ApplicationError::Internal(e),
            IpGeoError::Unauthorized => {
                ApplicationError::ExternalService("IP geolocation credentials rejected".into())
            },
            IpGeoError::ServiceUnavailable(e) => {
                ApplicationError::ExternalService(format!("IP geolocation unavailable: {e}"))
            },
            IpGeoError::RateLimitExceeded => {
                ApplicationError::ExternalService("IP geolocation rate limit exceeded".into())
            },
        }
    }
}

#[async_trait]
impl IpGeolocationPort for IpGeoAdapter {
    #[instrument(skip(self), fields(ip = %ip))]
    async fn zone_for_ip(&self, ip: IpAddr) -> Result<Option<String>, ApplicationError> {
        let zone = self
            .client
            .time_zone_for(ip)
            .await
            .map_err(Self::map_error)?;
        debug!(zone = zone.as_deref().unwrap_or("<none>"), "IP resolved");
        Ok(zone)
    }
}
