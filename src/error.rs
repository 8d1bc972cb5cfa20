//! Errors raised while wiring a locator together.
//!
//! The locator itself reports every failure as "not found"; these only
//! surface from the adapters that open databases and load assets.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LocatorError {
    #[error("failed to open GeoIP database {}: {source}", .path.display())]
    OpenDatabase {
        path: PathBuf,
        #[source]
        source: maxminddb::MaxMindDBError,
    },
    #[error("failed to read region names from {}: {source}", .path.display())]
    ReadRegionNames {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid region name table: {0}")]
    ParseRegionNames(#[from] serde_json::Error),
}
