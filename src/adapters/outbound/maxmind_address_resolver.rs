//! MaxMind Address Resolver
//!
//! Implements AddressResolver using a MaxMind GeoIP2 / GeoLite2 City database.

use crate::application::{AddressLocator, ResolverFactory};
use crate::domain::entities::LocationRecord;
use crate::domain::ports::AddressResolver;
use crate::domain::value_objects::{country_alpha3, RegionNameTable};
use crate::error::LocatorError;
use maxminddb::Reader;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::net::IpAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

const NAME_LOCALE: &str = "en";

/// MaxMind GeoIP resolver.
///
/// Parses the address, looks it up in the City database and flattens
/// the nested GeoIP2 response into a [`LocationRecord`]. GeoIP2 has no
/// telephone area codes, so `area_code` is always None.
pub struct MaxMindAddressResolver {
    reader: Arc<Reader<Vec<u8>>>,
}

impl MaxMindAddressResolver {
    /// Load a GeoIP database from a file path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LocatorError> {
        let path = path.as_ref();
        let reader = Reader::open_readfile(path).map_err(|source| LocatorError::OpenDatabase {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(
            "GeoIP DB loaded from {} ({})",
            path.display(),
            reader.metadata.database_type
        );
        Ok(Self {
            reader: Arc::new(reader),
        })
    }

    /// Load a GeoIP database from raw bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, LocatorError> {
        let reader = Reader::from_source(bytes).map_err(|source| LocatorError::OpenDatabase {
            path: PathBuf::from("<memory>"),
            source,
        })?;
        Ok(Self {
            reader: Arc::new(reader),
        })
    }

    /// A factory that opens the database at `path` when first called.
    pub fn lazy(path: impl Into<PathBuf>) -> ResolverFactory {
        let path = path.into();
        Box::new(move || {
            Self::from_file(&path).map(|r| Arc::new(r) as Arc<dyn AddressResolver>)
        })
    }

    /// A locator that opens the database at `path` on its first lookup.
    pub fn locator(path: impl Into<PathBuf>, region_names: Arc<RegionNameTable>) -> AddressLocator {
        AddressLocator::new(Self::lazy(path), region_names)
    }
}

#[derive(Debug, Deserialize)]
struct Named {
    names: Option<BTreeMap<String, String>>,
}

impl Named {
    fn name(self) -> Option<String> {
        self.names?.remove(NAME_LOCALE)
    }
}

#[derive(Debug, Deserialize)]
struct Country {
    iso_code: Option<String>,
    names: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Deserialize)]
struct Continent {
    code: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Subdivision {
    iso_code: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Postal {
    code: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Location {
    latitude: Option<f64>,
    longitude: Option<f64>,
    metro_code: Option<u16>,
}

#[derive(Debug, Deserialize)]
struct CityResp {
    city: Option<Named>,
    continent: Option<Continent>,
    country: Option<Country>,
    location: Option<Location>,
    postal: Option<Postal>,
    subdivisions: Option<Vec<Subdivision>>,
}

impl From<CityResp> for LocationRecord {
    fn from(resp: CityResp) -> Self {
        let (country_code, country_name) = match resp.country {
            Some(c) => (c.iso_code, Named { names: c.names }.name()),
            None => (None, None),
        };
        let country_code3 = country_code
            .as_deref()
            .and_then(country_alpha3)
            .map(str::to_owned);
        // The first subdivision is the largest one (state, province)
        let region_code = resp
            .subdivisions
            .and_then(|s| s.into_iter().next())
            .and_then(|s| s.iso_code);
        let (latitude, longitude, metro_code) = match resp.location {
            Some(l) => (l.latitude, l.longitude, l.metro_code),
            None => (None, None, None),
        };

        LocationRecord {
            country_code,
            country_code3,
            country_name,
            region_code,
            city: resp.city.and_then(Named::name),
            postal_code: resp.postal.and_then(|p| p.code),
            latitude,
            longitude,
            area_code: None,
            metro_code,
            continent_code: resp.continent.and_then(|c| c.code),
        }
    }
}

impl AddressResolver for MaxMindAddressResolver {
    fn resolve(&self, address: &str) -> Option<LocationRecord> {
        let ip: IpAddr = match address.trim().parse() {
            Ok(ip) => ip,
            Err(_) => {
                tracing::debug!("not an IP address: {:?}", address);
                return None;
            }
        };

        let resp: CityResp = self.reader.lookup(ip).ok()?;
        Some(resp.into())
    }
}
