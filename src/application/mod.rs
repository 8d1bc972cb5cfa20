//! Application layer: the use cases built on top of the domain ports.

mod address_locator;
mod shared_locator;

pub use address_locator::{AddressLocator, ResolverFactory};
pub use shared_locator::SharedAddressLocator;
