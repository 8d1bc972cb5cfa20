#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: String,
    pub region_names_path: Option<String>,
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: "GeoLite2-City.mmdb".to_string(),
            region_names_path: None,
            debug: false,
        }
    }
}

pub fn load_config() -> anyhow::Result<Config> {
    load_config_from(|key| std::env::var(key).ok())
}

/// Build the configuration from an arbitrary variable source.
pub fn load_config_from(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Config> {
    let db_path = var("GEOLOCATOR_DB_PATH")
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| "GeoLite2-City.mmdb".to_string());

    let region_names_path = var("GEOLOCATOR_REGION_NAMES_PATH").filter(|v| !v.is_empty());

    let debug = var("DEBUG").is_some();

    Ok(Config {
        db_path,
        region_names_path,
        debug,
    })
}
