//! Location resolution service
//!
//! Runs an ordered fallback chain over the available location inputs: IP
//! geolocation, coordinate lookup, city plus country, city alone, country
//! alone, and finally a UTC default. Provider failures and timeouts
//! degrade to the next strategy with a warning, never abort the chain.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use domain::ZoneCatalog;
use domain::entities::{LocationQuery, ResolutionOutcome, ResolutionSource, ZoneMetadata};
use domain::value_objects::{CountryCode, GeoLocation, Timezone, is_private_or_reserved};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::{CoordinateZonePort, GazetteerPort, IpGeolocationPort, PlaceSearch};
use crate::services::place_ranker::PlaceRanker;
use crate::services::zone_metadata::ZoneMetadataBuilder;

/// Tuning knobs for the fallback chain
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Per-provider call timeout in seconds
    #[serde(default = "default_provider_timeout_secs")]
    pub provider_timeout_secs: u64,
    /// Cap on zones enumerated for a multi-zone country
    #[serde(default = "default_max_country_zones")]
    pub max_country_zones: usize,
}

const fn default_provider_timeout_secs() -> u64 {
    10
}

const fn default_max_country_zones() -> usize {
    10
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            provider_timeout_secs: default_provider_timeout_secs(),
            max_country_zones: default_max_country_zones(),
        }
    }
}

/// One zone of a multi-zone lookup, with its provenance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupEntry {
    /// Display metadata for the zone on the requested day
    pub metadata: ZoneMetadata,
    /// Strategy that produced the zone
    pub source: ResolutionSource,
}

/// The result of running the fallback chain in multi-zone mode
///
/// Exhaustion of the chain is a value, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum LookupOutcome {
    /// At least one zone was found
    Resolved {
        /// Matching zones, most relevant first
        results: Vec<LookupEntry>,
        /// Caveats accumulated while resolving
        warning: Option<String>,
    },
    /// No strategy matched the inputs
    Unresolved {
        /// Why nothing matched
        message: String,
        /// Caveats accumulated while resolving
        warning: Option<String>,
    },
}

/// A strategy's contribution to the chain
struct StrategyHit {
    zones: Vec<Timezone>,
    source: ResolutionSource,
}

impl StrategyHit {
    fn single(zone: Timezone, source: ResolutionSource) -> Self {
        Self {
            zones: vec![zone],
            source,
        }
    }
}

/// Resolves location inputs to time zones via the fallback chain
pub struct LocationResolver {
    ip_geolocation: Arc<dyn IpGeolocationPort>,
    coordinate_zones: Arc<dyn CoordinateZonePort>,
    gazetteer: Arc<dyn GazetteerPort>,
    catalog: Arc<ZoneCatalog>,
    metadata: ZoneMetadataBuilder,
    ranker: PlaceRanker,
    config: ResolverConfig,
}

impl std::fmt::Debug for LocationResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocationResolver")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl LocationResolver {
    /// Create a resolver over the given providers and catalog
    #[must_use]
    pub fn new(
        ip_geolocation: Arc<dyn IpGeolocationPort>,
        coordinate_zones: Arc<dyn CoordinateZonePort>,
        gazetteer: Arc<dyn GazetteerPort>,
        catalog: Arc<ZoneCatalog>,
        config: ResolverConfig,
    ) -> Self {
        Self {
            ip_geolocation,
            coordinate_zones,
            gazetteer,
            metadata: ZoneMetadataBuilder::new(Arc::clone(&catalog)),
            catalog,
            ranker: PlaceRanker::new(),
            config,
        }
    }

    /// Resolve to a single best zone
    ///
    /// Never fails: when every strategy comes up empty the outcome is UTC
    /// with a warning.
    #[instrument(skip(self))]
    pub async fn resolve(&self, query: &LocationQuery) -> ResolutionOutcome {
        let mut warnings = Vec::new();
        let hit = self.run_chain(query, &mut warnings).await;

        match hit {
            Some(hit) => {
                let (zone, source) = self.pick_single(hit, &mut warnings);
                debug!(zone = %zone, source = %source, "resolved location");
                ResolutionOutcome {
                    zone,
                    source,
                    warning: join_warnings(warnings),
                }
            },
            None => {
                push_unique(
                    &mut warnings,
                    "No location input could be resolved; defaulting to UTC".to_string(),
                );
                ResolutionOutcome {
                    zone: Timezone::utc(),
                    source: ResolutionSource::Default,
                    warning: join_warnings(warnings),
                }
            },
        }
    }

    /// Resolve to every matching zone, with display metadata for a day
    #[instrument(skip(self))]
    pub async fn resolve_lookup(
        &self,
        query: &LocationQuery,
        reference_date: NaiveDate,
    ) -> LookupOutcome {
        let mut warnings = Vec::new();
        let hit = self.run_chain(query, &mut warnings).await;

        match hit {
            Some(hit) => {
                let results = hit
                    .zones
                    .into_iter()
                    .take(self.config.max_country_zones)
                    .map(|zone| LookupEntry {
                        metadata: self.metadata.metadata_for_zone(zone, reference_date),
                        source: hit.source,
                    })
                    .collect();
                LookupOutcome::Resolved {
                    results,
                    warning: join_warnings(warnings),
                }
            },
            None => LookupOutcome::Unresolved {
                message: "No time zone matched the provided location".to_string(),
                warning: join_warnings(warnings),
            },
        }
    }

    /// Reduce a hit to one zone, adjusting provenance for the multi-zone
    /// country case
    fn pick_single(
        &self,
        hit: StrategyHit,
        warnings: &mut Vec<String>,
    ) -> (Timezone, ResolutionSource) {
        let multi = hit.zones.len() > 1;
        let Some(zone) = hit.zones.into_iter().next() else {
            return (Timezone::utc(), ResolutionSource::Default);
        };
        if hit.source == ResolutionSource::CountryLookupMulti {
            if multi {
                push_unique(
                    warnings,
                    "Country spans multiple time zones; using the most populous".to_string(),
                );
            }
            (zone, ResolutionSource::CountryLookupSingle)
        } else {
            (zone, hit.source)
        }
    }

    async fn run_chain(
        &self,
        query: &LocationQuery,
        warnings: &mut Vec<String>,
    ) -> Option<StrategyHit> {
        if query.is_empty() {
            push_unique(warnings, "No location information provided".to_string());
            return None;
        }

        if let Some(hit) = self.try_ip(query, warnings).await {
            return Some(hit);
        }
        if let Some(hit) = self.try_coordinates(query, warnings).await {
            return Some(hit);
        }
        if let Some(hit) = self.try_city_country(query, warnings).await {
            return Some(hit);
        }
        if let Some(hit) = self.try_city(query, warnings).await {
            return Some(hit);
        }
        if let Some(hit) = self.try_country(query, warnings) {
            return Some(hit);
        }
        None
    }

    async fn try_ip(&self, query: &LocationQuery, warnings: &mut Vec<String>) -> Option<StrategyHit> {
        let ip = query.ip?;
        if is_private_or_reserved(&ip) {
            push_unique(
                warnings,
                format!("IP address {ip} is private or reserved; skipping IP geolocation"),
            );
            return None;
        }

        match self
            .with_timeout(self.ip_geolocation.zone_for_ip(ip))
            .await
        {
            Ok(Some(id)) => match self.catalog.validate(&id) {
                Some(zone) => Some(StrategyHit::single(zone, ResolutionSource::IpGeolocation)),
                None => {
                    push_unique(
                        warnings,
                        format!("IP geolocation returned unknown zone '{id}'"),
                    );
                    None
                },
            },
            Ok(None) => {
                push_unique(
                    warnings,
                    format!("IP geolocation found no time zone for {ip}"),
                );
                None
            },
            Err(err) => {
                warn!(%ip, error = %err, "IP geolocation failed");
                push_unique(warnings, "IP geolocation was unavailable".to_string());
                None
            },
        }
    }

    async fn try_coordinates(
        &self,
        query: &LocationQuery,
        warnings: &mut Vec<String>,
    ) -> Option<StrategyHit> {
        let (lat, lon) = query.coordinates?;
        let location = match GeoLocation::new(lat, lon) {
            Ok(location) => location,
            Err(_) => {
                push_unique(
                    warnings,
                    format!("Coordinates ({lat}, {lon}) are out of range; ignored"),
                );
                return None;
            },
        };

        match self
            .with_timeout(self.coordinate_zones.zones_at(&location))
            .await
        {
            Ok(ids) if ids.is_empty() => {
                push_unique(
                    warnings,
                    "Coordinates fall in international waters; using Etc/GMT".to_string(),
                );
                Some(StrategyHit::single(
                    Timezone::gmt(),
                    ResolutionSource::CoordinateLookupDefault,
                ))
            },
            Ok(ids) => {
                let zones = self.validate_ids(ids, warnings);
                if zones.is_empty() {
                    None
                } else {
                    Some(StrategyHit {
                        zones,
                        source: ResolutionSource::CoordinateLookup,
                    })
                }
            },
            Err(err) => {
                warn!(%location, error = %err, "coordinate lookup failed");
                push_unique(warnings, "Coordinate lookup was unavailable".to_string());
                None
            },
        }
    }

    async fn try_city_country(
        &self,
        query: &LocationQuery,
        warnings: &mut Vec<String>,
    ) -> Option<StrategyHit> {
        let city = query.city.as_deref()?;
        let country_name = query.country.as_deref()?;

        let Some(country) = CountryCode::from_name(country_name) else {
            push_unique(
                warnings,
                format!("Unrecognized country name '{country_name}'"),
            );
            return None;
        };

        let search = PlaceSearch {
            name: city.replace('-', " "),
            country: Some(country),
            order_by_population: false,
        };
        self.search_places(search, ResolutionSource::CityCountryLookup, warnings)
            .await
    }

    async fn try_city(
        &self,
        query: &LocationQuery,
        warnings: &mut Vec<String>,
    ) -> Option<StrategyHit> {
        let city = query.city.as_deref()?;
        let search = PlaceSearch {
            name: city.replace('-', " "),
            country: None,
            order_by_population: true,
        };
        self.search_places(search, ResolutionSource::CityLookup, warnings)
            .await
    }

    async fn search_places(
        &self,
        search: PlaceSearch,
        source: ResolutionSource,
        warnings: &mut Vec<String>,
    ) -> Option<StrategyHit> {
        let name = search.name.clone();
        match self.with_timeout(self.gazetteer.search(&search)).await {
            Ok(candidates) => {
                let Some(best) = self.ranker.best(candidates) else {
                    push_unique(
                        warnings,
                        format!("City '{name}' was not found or is too small to be indexed"),
                    );
                    return None;
                };
                let id = best.timezone.as_deref().unwrap_or_default();
                match self.catalog.validate(id) {
                    Some(zone) => Some(StrategyHit::single(zone, source)),
                    None => {
                        push_unique(
                            warnings,
                            format!("Place '{}' carried unknown zone '{id}'", best.name),
                        );
                        None
                    },
                }
            },
            Err(err) => {
                warn!(%name, error = %err, "gazetteer search failed");
                push_unique(
                    warnings,
                    format!("Place search for '{name}' was unavailable"),
                );
                None
            },
        }
    }

    fn try_country(
        &self,
        query: &LocationQuery,
        warnings: &mut Vec<String>,
    ) -> Option<StrategyHit> {
        let country_name = query.country.as_deref()?;
        let Some(country) = CountryCode::from_name(country_name) else {
            push_unique(
                warnings,
                format!("Unrecognized country name '{country_name}'"),
            );
            return None;
        };

        let zones: Vec<Timezone> = self
            .catalog
            .zones_for_country(country)
            .iter()
            .map(|z| z.zone)
            .collect();
        if zones.is_empty() {
            push_unique(
                warnings,
                format!("No time zone data for country '{country_name}'"),
            );
            return None;
        }

        let source = if zones.len() == 1 {
            ResolutionSource::CountryLookupSingle
        } else {
            ResolutionSource::CountryLookupMulti
        };
        Some(StrategyHit { zones, source })
    }

    /// Keep only catalog-valid zone ids, warning about the rest
    fn validate_ids(&self, ids: Vec<String>, warnings: &mut Vec<String>) -> Vec<Timezone> {
        let mut zones = Vec::with_capacity(ids.len());
        for id in ids {
            match self.catalog.validate(&id) {
                Some(zone) if !zones.contains(&zone) => zones.push(zone),
                Some(_) => {},
                None => push_unique(warnings, format!("Ignoring unknown zone id '{id}'")),
            }
        }
        zones
    }

    async fn with_timeout<T>(
        &self,
        fut: impl Future<Output = Result<T, ApplicationError>>,
    ) -> Result<T, ApplicationError> {
        let limit = Duration::from_secs(self.config.provider_timeout_secs);
        match tokio::time::timeout(limit, fut).await {
            Ok(result) => result,
            Err(_) => Err(ApplicationError::ExternalService(format!(
                "provider call exceeded {}s",
                self.config.provider_timeout_secs
            ))),
        }
    }
}

fn push_unique(warnings: &mut Vec<String>, warning: String) {
    if !warnings.contains(&warning) {
        warnings.push(warning);
    }
}

fn join_warnings(warnings: Vec<String>) -> Option<String> {
    if warnings.is_empty() {
        None
    } else {
        Some(warnings.join("; "))
    }
}
