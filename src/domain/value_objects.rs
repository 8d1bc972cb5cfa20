//! Value Objects - Immutable domain primitives
//!
//! Value objects are identified by their value rather than identity.
//! They are immutable and can be freely shared.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Two-level mapping from country code to region code to region name.
///
/// Loaded once (see [`load_region_names`](crate::adapters::outbound::load_region_names))
/// and shared read-only afterwards. Keys are matched exactly.
///
/// The JSON form is a nested object:
/// ```json
/// { "US": { "CA": "California", "NY": "New York" } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionNameTable {
    countries: HashMap<String, HashMap<String, String>>,
}

impl RegionNameTable {
    pub fn new(countries: HashMap<String, HashMap<String, String>>) -> Self {
        Self { countries }
    }

    /// Parse a table from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Look up the display name for a region.
    ///
    /// Returns None if either the country or the region is unmapped.
    pub fn region_name(&self, country_code: &str, region_code: &str) -> Option<&str> {
        self.countries
            .get(country_code)?
            .get(region_code)
            .map(String::as_str)
    }

    /// Total number of region entries across all countries.
    pub fn len(&self) -> usize {
        self.countries.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of countries with at least one entry.
    pub fn country_count(&self) -> usize {
        self.countries.values().filter(|r| !r.is_empty()).count()
    }
}

impl FromIterator<(String, String, String)> for RegionNameTable {
    fn from_iter<I: IntoIterator<Item = (String, String, String)>>(iter: I) -> Self {
        let mut countries: HashMap<String, HashMap<String, String>> = HashMap::new();
        for (country, region, name) in iter {
            countries.entry(country).or_default().insert(region, name);
        }
        Self { countries }
    }
}

/// Map an ISO 3166-1 alpha-2 country code to its alpha-3 form.
///
/// Also covers the pseudo-codes GeoIP databases use for anonymous
/// proxies, satellite providers and the EU/AP blocks.
#[rustfmt::skip]
pub fn country_alpha3(alpha2: &str) -> Option<&'static str> {
    let code = match alpha2.to_uppercase().as_str() {
        "AD" => "AND", "AE" => "ARE", "AF" => "AFG", "AG" => "ATG", "AI" => "AIA",
        "AL" => "ALB", "AM" => "ARM", "AO" => "AGO", "AQ" => "ATA", "AR" => "ARG",
        "AS" => "ASM", "AT" => "AUT", "AU" => "AUS", "AW" => "ABW", "AX" => "ALA",
        "AZ" => "AZE", "BA" => "BIH", "BB" => "BRB", "BD" => "BGD", "BE" => "BEL",
        "BF" => "BFA", "BG" => "BGR", "BH" => "BHR", "BI" => "BDI", "BJ" => "BEN",
        "BL" => "BLM", "BM" => "BMU", "BN" => "BRN", "BO" => "BOL", "BQ" => "BES",
        "BR" => "BRA", "BS" => "BHS", "BT" => "BTN", "BV" => "BVT", "BW" => "BWA",
        "BY" => "BLR", "BZ" => "BLZ", "CA" => "CAN", "CC" => "CCK", "CD" => "COD",
        "CF" => "CAF", "CG" => "COG", "CH" => "CHE", "CI" => "CIV", "CK" => "COK",
        "CL" => "CHL", "CM" => "CMR", "CN" => "CHN", "CO" => "COL", "CR" => "CRI",
        "CU" => "CUB", "CV" => "CPV", "CW" => "CUW", "CX" => "CXR", "CY" => "CYP",
        "CZ" => "CZE", "DE" => "DEU", "DJ" => "DJI", "DK" => "DNK", "DM" => "DMA",
        "DO" => "DOM", "DZ" => "DZA", "EC" => "ECU", "EE" => "EST", "EG" => "EGY",
        "EH" => "ESH", "ER" => "ERI", "ES" => "ESP", "ET" => "ETH", "FI" => "FIN",
        "FJ" => "FJI", "FK" => "FLK", "FM" => "FSM", "FO" => "FRO", "FR" => "FRA",
        "GA" => "GAB", "GB" => "GBR", "GD" => "GRD", "GE" => "GEO", "GF" => "GUF",
        "GG" => "GGY", "GH" => "GHA", "GI" => "GIB", "GL" => "GRL", "GM" => "GMB",
        "GN" => "GIN", "GP" => "GLP", "GQ" => "GNQ", "GR" => "GRC", "GS" => "SGS",
        "GT" => "GTM", "GU" => "GUM", "GW" => "GNB", "GY" => "GUY", "HK" => "HKG",
        "HM" => "HMD", "HN" => "HND", "HR" => "HRV", "HT" => "HTI", "HU" => "HUN",
        "ID" => "IDN", "IE" => "IRL", "IL" => "ISR", "IM" => "IMN", "IN" => "IND",
        "IO" => "IOT", "IQ" => "IRQ", "IR" => "IRN", "IS" => "ISL", "IT" => "ITA",
        "JE" => "JEY", "JM" => "JAM", "JO" => "JOR", "JP" => "JPN", "KE" => "KEN",
        "KG" => "KGZ", "KH" => "KHM", "KI" => "KIR", "KM" => "COM", "KN" => "KNA",
        "KP" => "PRK", "KR" => "KOR", "KW" => "KWT", "KY" => "CYM", "KZ" => "KAZ",
        "LA" => "LAO", "LB" => "LBN", "LC" => "LCA", "LI" => "LIE", "LK" => "LKA",
        "LR" => "LBR", "LS" => "LSO", "LT" => "LTU", "LU" => "LUX", "LV" => "LVA",
        "LY" => "LBY", "MA" => "MAR", "MC" => "MCO", "MD" => "MDA", "ME" => "MNE",
        "MF" => "MAF", "MG" => "MDG", "MH" => "MHL", "MK" => "MKD", "ML" => "MLI",
        "MM" => "MMR", "MN" => "MNG", "MO" => "MAC", "MP" => "MNP", "MQ" => "MTQ",
        "MR" => "MRT", "MS" => "MSR", "MT" => "MLT", "MU" => "MUS", "MV" => "MDV",
        "MW" => "MWI", "MX" => "MEX", "MY" => "MYS", "MZ" => "MOZ", "NA" => "NAM",
        "NC" => "NCL", "NE" => "NER", "NF" => "NFK", "NG" => "NGA", "NI" => "NIC",
        "NL" => "NLD", "NO" => "NOR", "NP" => "NPL", "NR" => "NRU", "NU" => "NIU",
        "NZ" => "NZL", "OM" => "OMN", "PA" => "PAN", "PE" => "PER", "PF" => "PYF",
        "PG" => "PNG", "PH" => "PHL", "PK" => "PAK", "PL" => "POL", "PM" => "SPM",
        "PN" => "PCN", "PR" => "PRI", "PS" => "PSE", "PT" => "PRT", "PW" => "PLW",
        "PY" => "PRY", "QA" => "QAT", "RE" => "REU", "RO" => "ROU", "RS" => "SRB",
        "RU" => "RUS", "RW" => "RWA", "SA" => "SAU", "SB" => "SLB", "SC" => "SYC",
        "SD" => "SDN", "SE" => "SWE", "SG" => "SGP", "SH" => "SHN", "SI" => "SVN",
        "SJ" => "SJM", "SK" => "SVK", "SL" => "SLE", "SM" => "SMR", "SN" => "SEN",
        "SO" => "SOM", "SR" => "SUR", "SS" => "SSD", "ST" => "STP", "SV" => "SLV",
        "SX" => "SXM", "SY" => "SYR", "SZ" => "SWZ", "TC" => "TCA", "TD" => "TCD",
        "TF" => "ATF", "TG" => "TGO", "TH" => "THA", "TJ" => "TJK", "TK" => "TKL",
        "TL" => "TLS", "TM" => "TKM", "TN" => "TUN", "TO" => "TON", "TR" => "TUR",
        "TT" => "TTO", "TV" => "TUV", "TW" => "TWN", "TZ" => "TZA", "UA" => "UKR",
        "UG" => "UGA", "UM" => "UMI", "US" => "USA", "UY" => "URY", "UZ" => "UZB",
        "VA" => "VAT", "VC" => "VCT", "VE" => "VEN", "VG" => "VGB", "VI" => "VIR",
        "VN" => "VNM", "VU" => "VUT", "WF" => "WLF", "WS" => "WSM", "XK" => "XKX",
        "YE" => "YEM", "YT" => "MYT", "ZA" => "ZAF", "ZM" => "ZMB", "ZW" => "ZWE",
        // GeoIP pseudo-countries
        "A1" => "A1", "A2" => "A2", "O1" => "O1", "EU" => "EU", "AP" => "AP",
        _ => return None,
    };
    Some(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> RegionNameTable {
        vec![
            ("US", "CA", "California"),
            ("US", "NY", "New York"),
            ("CA", "QC", "Quebec"),
        ]
        .into_iter()
        .map(|(c, r, n)| (c.to_string(), r.to_string(), n.to_string()))
        .collect()
    }

    // ===== RegionNameTable Tests =====

    #[test]
    fn test_region_name_found() {
        let table = sample_table();
        assert_eq!(table.region_name("US", "CA"), Some("California"));
        assert_eq!(table.region_name("CA", "QC"), Some("Quebec"));
    }

    #[test]
    fn test_region_name_unmapped_region() {
        let table = sample_table();
        assert_eq!(table.region_name("US", "ZZ"), None);
    }

    #[test]
    fn test_region_name_unmapped_country() {
        let table = sample_table();
        assert_eq!(table.region_name("XX", "CA"), None);
    }

    #[test]
    fn test_region_name_is_case_sensitive() {
        let table = sample_table();
        assert_eq!(table.region_name("us", "ca"), None);
    }

    #[test]
    fn test_len_counts_regions() {
        let table = sample_table();
        assert_eq!(table.len(), 3);
        assert_eq!(table.country_count(), 2);
        assert!(!table.is_empty());
    }

    #[test]
    fn test_empty_table() {
        let table = RegionNameTable::default();
        assert!(table.is_empty());
        assert_eq!(table.region_name("US", "CA"), None);
    }

    #[test]
    fn test_from_json() {
        let table =
            RegionNameTable::from_json(r#"{"US": {"CA": "California"}, "BR": {"SP": "Sao Paulo"}}"#)
                .unwrap();
        assert_eq!(table.region_name("US", "CA"), Some("California"));
        assert_eq!(table.region_name("BR", "SP"), Some("Sao Paulo"));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_from_json_rejects_flat_map() {
        let result = RegionNameTable::from_json(r#"{"US": "California"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_json_roundtrip_shape() {
        let table = sample_table();
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json["US"]["NY"], "New York");
    }

    // ===== country_alpha3 Tests =====

    #[test]
    fn test_alpha3_known_countries() {
        let tests = vec![
            ("US", "USA"),
            ("BR", "BRA"),
            ("GB", "GBR"),
            ("DE", "DEU"),
            ("JP", "JPN"),
            ("ZA", "ZAF"),
        ];

        for (input, expected) in tests {
            assert_eq!(
                country_alpha3(input),
                Some(expected),
                "Failed for input: {}",
                input
            );
        }
    }

    #[test]
    fn test_alpha3_lowercase_input() {
        assert_eq!(country_alpha3("fr"), Some("FRA"));
    }

    #[test]
    fn test_alpha3_pseudo_countries() {
        assert_eq!(country_alpha3("A1"), Some("A1"));
        assert_eq!(country_alpha3("EU"), Some("EU"));
    }

    #[test]
    fn test_alpha3_unknown() {
        assert_eq!(country_alpha3("ZZ"), None);
        assert_eq!(country_alpha3(""), None);
    }
}
