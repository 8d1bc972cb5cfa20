//! geo-locator - look up IP addresses in a GeoIP City database
//!
//! Prints one JSON object per address given on the command line.

use anyhow::Context;
use geo_locator::{
    embedded_region_names, load_config, load_region_names, AddressLocator, MaxMindAddressResolver,
};
use std::io::Write;
use std::sync::Arc;

fn describe(locator: &mut AddressLocator, ip: &str) -> serde_json::Value {
    if !locator.lookup(ip) {
        tracing::warn!("no location found for {}", ip);
        return serde_json::json!({ "ip": ip, "found": false });
    }

    serde_json::json!({
        "ip": ip,
        "found": true,
        "country_code": locator.country_code(None),
        "country_code3": locator.country_code3(None),
        "country_name": locator.country_name(None),
        "region_code": locator.region_code(None),
        "region_name": locator.region_name(None),
        "city": locator.city(None),
        "postal_code": locator.postal_code(None),
        "latitude": locator.latitude(None),
        "longitude": locator.longitude(None),
        "area_code": locator.area_code(None),
        "metro_code": locator.metro_code(None),
        "continent_code": locator.continent_code(None),
    })
}

/// Describe every address, stopping if the database cannot be opened.
///
/// A miss caused by an unopenable database is not a real answer, so it
/// is reported as an error instead of `"found": false`.
fn run(locator: &mut AddressLocator, addresses: &[String], out: &mut impl Write) -> anyhow::Result<()> {
    for ip in addresses {
        let value = describe(locator, ip);
        if !locator.is_initialized() {
            anyhow::bail!("GeoIP database could not be opened");
        }
        writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    // Load configuration from environment
    let cfg = load_config()?;

    // Setup logging
    let log_level = if cfg.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    let addresses: Vec<String> = std::env::args().skip(1).collect();
    if addresses.is_empty() {
        anyhow::bail!("usage: geo-locator <ip> [<ip> ...]");
    }

    let region_names = match &cfg.region_names_path {
        Some(path) => load_region_names(path)?,
        None => embedded_region_names()?,
    };

    // The database is opened on the first lookup
    let mut locator = MaxMindAddressResolver::locator(&cfg.db_path, Arc::new(region_names));

    run(&mut locator, &addresses, &mut std::io::stdout().lock())
        .with_context(|| format!("database path {}", cfg.db_path))
}
