//! Port adapters over the integration clients

mod gazetteer_adapter;
mod ip_geo_adapter;
mod tz_finder_adapter;

pub use gazetteer_adapter::GazetteerAdapter;
pub use ip_geo_adapter::IpGeoAdapter;
pub use tz_finder_adapter::TzFinderAdapter;
