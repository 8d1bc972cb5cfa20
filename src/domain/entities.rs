//! Domain Entities - Core business objects
//!
//! The location record is the only entity: the bundle of geographic
//! fields a resolver produces for one address.

use serde::{Deserialize, Serialize};

/// Geographic information resolved from an IP address.
///
/// Every field is optional; which ones are present depends on what the
/// underlying database knows about the queried address. Records are
/// produced by an [`AddressResolver`](crate::domain::ports::AddressResolver)
/// and never modified afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    /// Country code (ISO 3166-1 alpha-2: BR, US, FR, etc)
    pub country_code: Option<String>,
    /// Country code (ISO 3166-1 alpha-3: BRA, USA, FRA, etc)
    pub country_code3: Option<String>,
    /// Country display name
    pub country_name: Option<String>,
    /// Region (subdivision) code within the country, e.g. "CA" for California
    pub region_code: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Telephone area code
    pub area_code: Option<u16>,
    /// Metro (DMA) code, US only
    pub metro_code: Option<u16>,
    /// Continent code (AF, AN, AS, EU, NA, OC, SA)
    pub continent_code: Option<String>,
}

impl LocationRecord {
    /// Returns `(latitude, longitude)` when both are known.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        Some((self.latitude?, self.longitude?))
    }
}
