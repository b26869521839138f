//! Diagnostic logging to disk.
//!
//! When enabled, `tracing` events are written to a daily log file named
//! `homefinder_<date>.log` in the configured log directory (default:
//! `~/.local/share/homefinder/logs/`). Nothing is ever written to stdout,
//! which belongs to the terminal UI.

use crate::config::{expand_home, LoggingConfig};
use anyhow::{anyhow, Context, Result};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Mutex;
use tracing::Level;

/// File the logger would write to today.
pub fn log_file_path(config: &LoggingConfig) -> PathBuf {
    let date = chrono::Local::now().format("%Y-%m-%d").to_string();
    expand_home(&config.log_dir).join(format!("homefinder_{}.log", date))
}

pub fn parse_level(level: &str) -> Result<Level> {
    Level::from_str(level.trim()).map_err(|_| anyhow!("Unknown log level '{}'", level))
}

/// Install the global subscriber. No-op when logging is disabled.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let level = parse_level(&config.level)?;
    let path = log_file_path(config);
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_max_level(level)
        .try_init()
        .map_err(|e| anyhow!("Failed to install logger: {}", e))?;

    tracing::info!(path = %path.display(), %level, "logging started");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("info").unwrap(), Level::INFO);
        assert_eq!(parse_level(" DEBUG ").unwrap(), Level::DEBUG);
        assert!(parse_level("chatty").is_err());
    }

    #[test]
    fn test_log_file_named_by_date() {
        let config = LoggingConfig {
            enabled: true,
            log_dir: "/tmp/homefinder-logs".to_string(),
            level: "info".to_string(),
        };
        let path = log_file_path(&config);
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(path.starts_with("/tmp/homefinder-logs"));
        assert!(name.starts_with("homefinder_"));
        assert!(name.ends_with(".log"));
    }

    #[test]
    fn test_disabled_is_noop() {
        assert!(init(&LoggingConfig::default()).is_ok());
    }
}
