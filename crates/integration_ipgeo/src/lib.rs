//! GeoLite2 IP geolocation integration
//!
//! Client for the MaxMind GeoLite2 City web service
//! (<https://dev.maxmind.com/geoip/geolite2-free-geolocation-data>).
//! Resolves public IP addresses to their IANA time zone.

pub mod client;
mod models;

pub use client::{GeoLiteClient, IpGeoClient, IpGeoConfig, IpGeoError};
pub use models::{CityResponse, IpLocation};
