//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with the
//! external location providers. Adapters in the infrastructure layer
//! implement these ports.

mod coordinate_zone_port;
mod gazetteer_port;
mod ip_geolocation_port;

pub use coordinate_zone_port::CoordinateZonePort;
#[cfg(test)]
pub use coordinate_zone_port::MockCoordinateZonePort;
pub use gazetteer_port::{GazetteerPort, PlaceSearch};
#[cfg(test)]
pub use gazetteer_port::MockGazetteerPort;
pub use ip_geolocation_port::IpGeolocationPort;
#[cfg(test)]
pub use ip_geolocation_port::MockIpGeolocationPort;
