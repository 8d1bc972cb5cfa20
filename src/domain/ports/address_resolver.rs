//! Address Resolver Port
//!
//! Defines the interface for resolving IP addresses to location records.

use crate::domain::entities::LocationRecord;

/// Resolver for IP address to geographic location.
///
/// This is an outbound port that abstracts the GeoIP database.
/// Implementations own the address format: a string they cannot parse
/// is simply a miss.
pub trait AddressResolver: Send + Sync {
    /// Resolve an address to its location record,
    /// or None if the address cannot be resolved.
    fn resolve(&self, address: &str) -> Option<LocationRecord>;
}
