//! Gazetteer search port
//!
//! Defines the interface for place-name search against a gazetteer such
//! as GeoNames.

use async_trait::async_trait;
use domain::entities::CandidatePlace;
use domain::value_objects::CountryCode;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// Parameters for an exact-name gazetteer search
///
/// Implementations restrict results to populated and administrative place
/// classes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceSearch {
    /// Exact place name to match
    pub name: String,
    /// Restrict matches to this country when set
    pub country: Option<CountryCode>,
    /// Ask the provider to order matches by population, descending
    pub order_by_population: bool,
}

/// Port for gazetteer place search
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GazetteerPort: Send + Sync {
    /// Search for places matching the given parameters
    ///
    /// Each returned place carries its own resolved timezone id.
    async fn search(&self, search: &PlaceSearch)
    -> Result<Vec<CandidatePlace>, ApplicationError>;
}
