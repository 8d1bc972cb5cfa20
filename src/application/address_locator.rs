//! Address Locator - Main application use case
//!
//! Caches the most recent resolution and exposes it field by field.
//! Every accessor follows the same protocol: when given an address it
//! performs a fresh lookup first, then reads from whatever record is
//! cached. A miss clears the cache, so state never outlives a failed
//! lookup.

use crate::domain::entities::LocationRecord;
use crate::domain::ports::AddressResolver;
use crate::domain::value_objects::RegionNameTable;
use crate::error::LocatorError;
use std::sync::Arc;

/// Builds the resolver the first time a lookup needs it.
pub type ResolverFactory =
    Box<dyn Fn() -> Result<Arc<dyn AddressResolver>, LocatorError> + Send>;

/// Field-level access to the most recent address resolution.
///
/// Lookups take `&mut self`; share an instance across threads through
/// [`SharedAddressLocator`](crate::application::SharedAddressLocator).
pub struct AddressLocator {
    factory: Option<ResolverFactory>,
    resolver: Option<Arc<dyn AddressResolver>>,
    record: Option<LocationRecord>,
    region_names: Arc<RegionNameTable>,
}

impl AddressLocator {
    /// Create a locator that builds its resolver on first lookup.
    ///
    /// If the factory fails, the lookup reports a miss and the next
    /// lookup tries again.
    pub fn new(factory: ResolverFactory, region_names: Arc<RegionNameTable>) -> Self {
        Self {
            factory: Some(factory),
            resolver: None,
            record: None,
            region_names,
        }
    }

    /// Create a locator around an already constructed resolver.
    pub fn with_resolver(
        resolver: Arc<dyn AddressResolver>,
        region_names: Arc<RegionNameTable>,
    ) -> Self {
        Self {
            factory: None,
            resolver: Some(resolver),
            record: None,
            region_names,
        }
    }

    fn resolver(&mut self) -> Option<&dyn AddressResolver> {
        if self.resolver.is_none() {
            let factory = self.factory.as_ref()?;
            match factory() {
                Ok(resolver) => {
                    tracing::debug!("address resolver initialized");
                    self.resolver = Some(resolver);
                }
                Err(e) => {
                    tracing::error!("failed to initialize address resolver: {}", e);
                    return None;
                }
            }
        }
        self.resolver.as_deref()
    }

    /// Resolve an address and cache the result.
    ///
    /// Returns true on a hit. On a miss the cached record is cleared.
    pub fn lookup(&mut self, ip: &str) -> bool {
        let record = self.resolver().and_then(|r| r.resolve(ip));
        if record.is_none() {
            tracing::debug!("no location record for {}", ip);
        }
        self.record = record;
        self.record.is_some()
    }

    /// The cached record, if the last lookup succeeded.
    pub fn record(&self) -> Option<&LocationRecord> {
        self.record.as_ref()
    }

    /// Drop the cached record.
    pub fn clear(&mut self) {
        self.record = None;
    }

    /// Whether the resolver has been constructed yet.
    pub fn is_initialized(&self) -> bool {
        self.resolver.is_some()
    }

    fn field<T>(
        &mut self,
        ip: Option<&str>,
        select: impl FnOnce(&LocationRecord) -> Option<T>,
    ) -> Option<T> {
        if let Some(ip) = ip.filter(|ip| !ip.is_empty()) {
            self.lookup(ip);
        }
        self.record.as_ref().and_then(select)
    }

    pub fn country_code(&mut self, ip: Option<&str>) -> Option<String> {
        self.field(ip, |r| r.country_code.clone())
    }

    pub fn country_code3(&mut self, ip: Option<&str>) -> Option<String> {
        self.field(ip, |r| r.country_code3.clone())
    }

    pub fn country_name(&mut self, ip: Option<&str>) -> Option<String> {
        self.field(ip, |r| r.country_name.clone())
    }

    pub fn region_code(&mut self, ip: Option<&str>) -> Option<String> {
        self.field(ip, |r| r.region_code.clone())
    }

    /// Display name of the cached record's region.
    ///
    /// None when there is no record, when it lacks a country or region
    /// code, or when the pair is not in the region table.
    pub fn region_name(&mut self, ip: Option<&str>) -> Option<String> {
        let names = Arc::clone(&self.region_names);
        self.field(ip, |r| {
            let country = r.country_code.as_deref()?;
            let region = r.region_code.as_deref()?;
            names.region_name(country, region).map(str::to_owned)
        })
    }

    pub fn city(&mut self, ip: Option<&str>) -> Option<String> {
        self.field(ip, |r| r.city.clone())
    }

    pub fn postal_code(&mut self, ip: Option<&str>) -> Option<String> {
        self.field(ip, |r| r.postal_code.clone())
    }

    pub fn latitude(&mut self, ip: Option<&str>) -> Option<f64> {
        self.field(ip, |r| r.latitude)
    }

    pub fn longitude(&mut self, ip: Option<&str>) -> Option<f64> {
        self.field(ip, |r| r.longitude)
    }

    pub fn area_code(&mut self, ip: Option<&str>) -> Option<u16> {
        self.field(ip, |r| r.area_code)
    }

    pub fn metro_code(&mut self, ip: Option<&str>) -> Option<u16> {
        self.field(ip, |r| r.metro_code)
    }

    pub fn continent_code(&mut self, ip: Option<&str>) -> Option<String> {
        self.field(ip, |r| r.continent_code.clone())
    }
}
