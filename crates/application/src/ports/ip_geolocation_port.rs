//! IP geolocation port
//!
//! Defines the interface for resolving a public IP address to a zone id.

use std::net::IpAddr;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for IP geolocation lookups
///
/// Callers must not dispatch private or reserved addresses; the resolver
/// screens them out before this port is reached.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait IpGeolocationPort: Send + Sync {
    /// Resolve the IANA zone id for a public IP address
    ///
    /// Returns `Ok(None)` when the provider knows the address but has no
    /// timezone for it.
    async fn zone_for_ip(&self, ip: IpAddr) -> Result<Option<String>, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn IpGeolocationPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn IpGeolocationPort>();
    }
}
