//! Gazetteer adapter - Implements GazetteerPort using integration_geonames

use application::error::ApplicationError;
use application::ports::{GazetteerPort, PlaceSearch};
use async_trait::async_trait;
use domain::entities::CandidatePlace;
use integration_geonames::{
    GazetteerClient, GeoNamesClient, GeoNamesConfig, GeoNamesError, PlaceQuery, PlaceRecord,
};
use tracing::{debug, instrument};

/// Adapter for place search using the GeoNames web service
pub struct GazetteerAdapter {
    client: GeoNamesClient,
}

impl std::fmt::Debug for GazetteerAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GazetteerAdapter")
            .field("client", &"GeoNamesClient")
            .finish()
    }
}

impl GazetteerAdapter {
    /// Create an adapter with the given service configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: GeoNamesConfig) -> Result<Self, ApplicationError> {
        let client =
            GeoNamesClient::new(config).map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    fn map_error(err: GeoNamesError) -> ApplicationError {
        match err {
            GeoNamesError::ConnectionFailed(e) | GeoNamesError::RequestFailed(e) => {
                ApplicationError::ExternalService(e)
            },
            GeoNamesError::ParseError(e) => ApplicationError::Internal(e),
            GeoNamesError::Unauthorized(e) => {
                ApplicationError::ExternalService(format!("gazetteer credentials rejected: {e}"))
            },
            GeoNamesError::ServiceUnavailable(e) => {
                ApplicationError::ExternalService(format!("gazetteer unavailable: {e}"))
            },
            GeoNamesError::RateLimitExceeded(e) => {
                ApplicationError::ExternalService(format!("gazetteer rate limit exceeded: {e}"))
            },
        }
    }

    fn map_place(record: PlaceRecord) -> CandidatePlace {
        CandidatePlace {
            name: record.name,
            latitude: record.latitude,
            longitude: record.longitude,
            population: record.population,
            feature_code: record.feature_code,
            external_relevance: record.score,
            timezone: record.time_zone,
        }
    }
}

#[async_trait]
impl GazetteerPort for GazetteerAdapter {
    #[instrument(skip(self), fields(name = %search.name))]
    async fn search(
        &self,
        search: &PlaceSearch,
    ) -> Result<Vec<CandidatePlace>, ApplicationError> {
        let query = PlaceQuery {
            name: search.name.clone(),
            country: search.country.map(|c| c.as_str().to_string()),
            order_by_population: search.order_by_population,
        };

        let records = self.client.search(&query).await.map_err(Self::map_error)?;
        debug!(matches = records.len(), "gazetteer search finished");
        Ok(records.into_iter().map(Self::map_place).collect())
    }
}
