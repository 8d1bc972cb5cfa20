//! Region Name Loader
//!
//! Loads the country/region display-name table from JSON, either from a
//! file on disk or from the copy compiled into the binary.

use crate::domain::value_objects::RegionNameTable;
use crate::error::LocatorError;
use std::path::Path;

/// Embedded region name table (compiled into binary).
const EMBEDDED_REGION_NAMES: &str = include_str!("../../../data/region_names.json");

/// Load the embedded region name table.
pub fn embedded_region_names() -> Result<RegionNameTable, LocatorError> {
    Ok(RegionNameTable::from_json(EMBEDDED_REGION_NAMES)?)
}

/// Load a region name table from a JSON file.
pub fn load_region_names(path: impl AsRef<Path>) -> Result<RegionNameTable, LocatorError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| LocatorError::ReadRegionNames {
        path: path.to_path_buf(),
        source,
    })?;
    let table = RegionNameTable::from_json(&json)?;
    tracing::info!(
        "loaded {} region names for {} countries from {}",
        table.len(),
        table.country_count(),
        path.display()
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_embedded_table_loads() {
        let table = embedded_region_names().unwrap();
        assert!(!table.is_empty());
    }

    #[test]
    fn test_embedded_table_us_states() {
        let table = embedded_region_names().unwrap();
        assert_eq!(table.region_name("US", "CA"), Some("California"));
        assert_eq!(table.region_name("US", "NY"), Some("New York"));
        assert_eq!(table.region_name("US", "DC"), Some("District of Columbia"));
        assert_eq!(table.region_name("US", "ZZ"), None);
    }

    #[test]
    fn test_embedded_table_other_countries() {
        let table = embedded_region_names().unwrap();
        assert_eq!(table.region_name("CA", "QC"), Some("Quebec"));
        assert_eq!(table.region_name("BR", "SP"), Some("São Paulo"));
        assert_eq!(table.region_name("AU", "NSW"), Some("New South Wales"));
        assert_eq!(table.region_name("GB", "ENG"), Some("England"));
    }

    #[test]
    fn test_embedded_table_covers_subdivisions_worldwide() {
        let table = embedded_region_names().unwrap();
        let tests = vec![
            ("FR", "IDF", "Île-de-France"),
            ("IT", "25", "Lombardia"),
            ("ES", "MD", "Madrid, Comunidad de"),
            ("JP", "13", "Tokyo"),
            ("IN", "MH", "Mahārāshtra"),
            ("CN", "BJ", "Beijing Shi"),
            ("DE", "BY", "Bayern"),
            ("US", "WA", "Washington"),
        ];

        for (country, region, expected) in tests {
            assert_eq!(
                table.region_name(country, region),
                Some(expected),
                "Failed for {}-{}",
                country,
                region
            );
        }
    }

    #[test]
    fn test_embedded_table_size() {
        let table = embedded_region_names().unwrap();
        assert!(table.country_count() >= 190, "countries: {}", table.country_count());
        assert!(table.len() >= 5000, "entries: {}", table.len());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"NZ": {{"AUK": "Auckland", "WGN": "Wellington"}}}}"#).unwrap();

        let table = load_region_names(file.path()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.region_name("NZ", "AUK"), Some("Auckland"));
        assert_eq!(table.region_name("US", "CA"), None);
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_region_names("/nonexistent/region_names.json");
        assert!(matches!(result, Err(LocatorError::ReadRegionNames { .. })));
    }

    #[test]
    fn test_load_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let result = load_region_names(file.path());
        assert!(matches!(result, Err(LocatorError::ParseRegionNames(_))));
    }
}
