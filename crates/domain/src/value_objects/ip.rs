//! IP address classification
//!
//! Private and reserved addresses carry no geographic information and must
//! never be sent to the geolocation provider.

use std::net::IpAddr;

/// Check whether an address falls in a private or reserved range
///
/// Covers IPv4 10/8, 172.16/12, 192.168/16, 127/8 and 169.254/16, and
/// IPv6 loopback, unique-local (`fc00::/7`) and link-local (`fe80::/10`).
#[must_use]
pub fn is_private_or_reserved(ip: &IpAddr) -> bool {
    match ip {
        IpAddr::V4(v4) => v4.is_private() || v4.is_loopback() || v4.is_link_local(),
        IpAddr::V6(v6) => {
            let first = v6.segments()[0];
            v6.is_loopback() || (first & 0xfe00) == 0xfc00 || (first & 0xffc0) == 0xfe80
        },
    }
}
