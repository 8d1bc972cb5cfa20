//! DashMap Address Resolver
//!
//! Implements AddressResolver over an in-memory table, for fixtures and
//! for overriding database answers on specific addresses.

use crate::domain::entities::LocationRecord;
use crate::domain::ports::AddressResolver;
use dashmap::DashMap;
use std::net::IpAddr;

/// DashMap-backed address resolver.
///
/// Keys are parsed addresses, so "::1" and "0:0:0:0:0:0:0:1" hit the
/// same entry. Entries can be added and removed while the resolver is
/// shared with a locator.
pub struct DashMapAddressResolver {
    records: DashMap<IpAddr, LocationRecord>,
}

impl DashMapAddressResolver {
    /// Create an empty resolver.
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }

    pub fn insert(&self, ip: IpAddr, record: LocationRecord) {
        self.records.insert(ip, record);
    }

    pub fn remove(&self, ip: &IpAddr) -> Option<LocationRecord> {
        self.records.remove(ip).map(|(_, record)| record)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for DashMapAddressResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<(IpAddr, LocationRecord)> for DashMapAddressResolver {
    fn from_iter<I: IntoIterator<Item = (IpAddr, LocationRecord)>>(iter: I) -> Self {
        let resolver = Self::new();
        for (ip, record) in iter {
            resolver.insert(ip, record);
        }
        resolver
    }
}

impl AddressResolver for DashMapAddressResolver {
    fn resolve(&self, address: &str) -> Option<LocationRecord> {
        let ip: IpAddr = address.trim().parse().ok()?;
        self.records.get(&ip).map(|e| e.value().clone())
    }
}
