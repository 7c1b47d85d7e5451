//! Value objects used throughout the domain

mod country;
mod geo_location;
mod ip;
mod timezone;

pub use country::CountryCode;
pub use geo_location::GeoLocation;
pub use ip::is_private_or_reserved;
pub use timezone::Timezone;
