//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use serde::{Deserialize, Serialize};

use crate::listings::{sample_listings, Listing};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default = "sample_listings")]
    pub listings: Vec<Listing>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ui: UiConfig::default(),
            logging: LoggingConfig::default(),
            listings: sample_listings(),
        }
    }
}

/// Display settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Placeholder of the search field in the header.
    #[serde(default = "default_header_placeholder")]
    pub header_placeholder: String,
    /// Placeholder of the search field above the hero banner.
    #[serde(default = "default_home_placeholder")]
    pub home_placeholder: String,
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            header_placeholder: default_header_placeholder(),
            home_placeholder: default_home_placeholder(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

/// Diagnostic log settings. Logs go to a file because the terminal is
/// occupied by the UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_header_placeholder() -> String {
    "Search".to_string()
}
fn default_home_placeholder() -> String {
    "Search for properties".to_string()
}
fn default_tick_rate_ms() -> u64 {
    50
}
fn default_log_dir() -> String {
    "~/.local/share/homefinder/logs".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listings::ListingKind;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.ui.header_placeholder, "Search");
        assert_eq!(cfg.ui.home_placeholder, "Search for properties");
        assert_eq!(cfg.ui.tick_rate_ms, 50);
        assert!(!cfg.logging.enabled);
        assert_eq!(cfg.logging.level, "info");
        assert_eq!(cfg.listings, sample_listings());
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [ui]
            home_placeholder = "Suburb or postcode"

            [logging]
            enabled = true
            "#,
        )
        .unwrap();
        assert_eq!(cfg.ui.home_placeholder, "Suburb or postcode");
        assert_eq!(cfg.ui.header_placeholder, "Search");
        assert!(cfg.logging.enabled);
        assert_eq!(cfg.logging.log_dir, "~/.local/share/homefinder/logs");
        assert_eq!(cfg.listings.len(), 3);
    }

    #[test]
    fn test_listings_replace_samples() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [[listings]]
            price = "$1,200,000"
            address = "1 Harbour View, Hobart"
            beds = 5
            kind = "Sale"
            image_url = "https://example.com/hobart.jpg"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.listings.len(), 1);
        let listing = &cfg.listings[0];
        assert_eq!(listing.kind, ListingKind::Sale);
        assert_eq!(listing.baths, 0);
        assert_eq!(
            listing.image_url.as_deref(),
            Some("https://example.com/hobart.jpg")
        );
    }

    #[test]
    fn test_round_trips_through_toml() {
        let cfg = AppConfig::default();
        let text = toml::to_string_pretty(&cfg).unwrap();
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.listings, cfg.listings);
        assert_eq!(back.ui.tick_rate_ms, cfg.ui.tick_rate_ms);
    }
}
