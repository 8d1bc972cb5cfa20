//! geo-locator Library
//!
//! Field-level access to GeoIP lookups: a locator that caches the most
//! recent resolution, the resolver port it consumes, and the MaxMind and
//! in-memory adapters behind that port.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;

// Re-export commonly used types
pub use adapters::outbound::{
    embedded_region_names, load_region_names, DashMapAddressResolver, MaxMindAddressResolver,
};
pub use application::{AddressLocator, ResolverFactory, SharedAddressLocator};
pub use config::load_config;
pub use domain::entities::LocationRecord;
pub use domain::ports::AddressResolver;
pub use domain::value_objects::{country_alpha3, RegionNameTable};
pub use error::LocatorError;
