/// Site configuration loader - parses site.toml
///
/// Separates the monitored site from code, making it easy to point the
/// service at a different river without recompiling. The file is
/// optional: with no site.toml present the service falls back to the
/// built-in default site.

use serde::Deserialize;
use std::fs;

/// Default site: Harpeth River at Bellevue, TN. Has gage, discharge,
/// and water temperature data.
pub const DEFAULT_SITE_CODE: &str = "03433500";

/// Site metadata loaded from the site.toml configuration file.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// 8-digit USGS site code. Look them up at
    /// https://waterdata.usgs.gov/nwis/inventory — the site needs gage
    /// and discharge data, and even then it may not report temperature.
    pub site_code: String,
    pub description: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            site_code: DEFAULT_SITE_CODE.to_string(),
            description: Some("Harpeth River at Bellevue, TN".to_string()),
        }
    }
}

/// Root configuration structure for TOML parsing.
#[derive(Debug, Deserialize)]
struct ConfigFile {
    site: SiteConfig,
}

/// Loads site configuration from site.toml in the working directory.
///
/// A missing file yields the default site. A present-but-malformed file
/// panics — the service should not silently monitor the wrong river.
pub fn load_config() -> SiteConfig {
    let config_path = "site.toml";

    match fs::read_to_string(config_path) {
        Ok(contents) => parse_config(&contents)
            .unwrap_or_else(|e| panic!("Failed to parse {}: {}", config_path, e)),
        Err(_) => SiteConfig::default(),
    }
}

/// Parses site configuration from TOML text.
pub fn parse_config(contents: &str) -> Result<SiteConfig, toml::de::Error> {
    toml::from_str::<ConfigFile>(contents).map(|c| c.site)
}
