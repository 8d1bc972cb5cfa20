mod dashmap_address_resolver;
mod maxmind_address_resolver;
mod region_name_loader;

pub use dashmap_address_resolver::DashMapAddressResolver;
pub use maxmind_address_resolver::MaxMindAddressResolver;
pub use region_name_loader::{embedded_region_names, load_region_names};
