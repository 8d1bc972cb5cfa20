//! Shared Address Locator
//!
//! The locator keeps its cached record behind `&mut self`. Callers that
//! need one instance across threads go through this wrapper, which
//! serializes every lookup-and-read sequence under a single lock.

use crate::application::AddressLocator;
use crate::domain::entities::LocationRecord;
use parking_lot::Mutex;
use std::sync::Arc;

/// Cloneable, thread-safe handle to an [`AddressLocator`].
#[derive(Clone)]
pub struct SharedAddressLocator {
    inner: Arc<Mutex<AddressLocator>>,
}

impl SharedAddressLocator {
    pub fn new(locator: AddressLocator) -> Self {
        Self {
            inner: Arc::new(Mutex::new(locator)),
        }
    }

    /// Look up an address and return a snapshot of the resulting record.
    ///
    /// The lookup and the read happen under one lock acquisition, so the
    /// snapshot cannot be overwritten by a concurrent caller in between.
    pub fn locate(&self, ip: &str) -> Option<LocationRecord> {
        let mut locator = self.inner.lock();
        locator.lookup(ip);
        locator.record().cloned()
    }

    /// Run a closure with exclusive access to the locator.
    pub fn with<R>(&self, f: impl FnOnce(&mut AddressLocator) -> R) -> R {
        let mut locator = self.inner.lock();
        f(&mut locator)
    }
}

impl From<AddressLocator> for SharedAddressLocator {
    fn from(locator: AddressLocator) -> Self {
        Self::new(locator)
    }
}
