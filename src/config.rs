//! # Configuration Management
//!
//! This module handles loading and parsing configuration from the
//! tide-config.toml file. It provides a centralized way to configure the
//! default NOAA station and request tuning (endpoint, timeout).
//!
//! A missing or invalid file falls back to compiled defaults so the tool
//! works out of the box.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::tide_data::DEFAULT_BASE_URL;

/// Application configuration loaded from tide-config.toml
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Default NOAA station to query when none is given on the command line
    pub station: StationConfig,
    /// HTTP request configuration
    pub request: RequestConfig,
}

/// NOAA tide station configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct StationConfig {
    /// NOAA station ID (e.g., "9413745" for Santa Cruz, CA)
    pub id: String,
    /// Human-readable station name for reference
    pub name: String,
}

/// HTTP request configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct RequestConfig {
    /// Base URL of the datagetter endpoint; overridable for testing
    pub base_url: String,
    /// Client-side request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            station: StationConfig {
                id: "9413745".to_string(),
                name: "Santa Cruz, CA".to_string(),
            },
            request: RequestConfig::default(),
        }
    }
}

impl Default for RequestConfig {
    fn default() -> Self {
        RequestConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

impl Config {
    /// Load configuration from tide-config.toml file
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load() -> Self {
        Self::load_from_path("tide-config.toml")
    }

    /// Load configuration from specified path
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str::<Config>(&contents) {
                Ok(config) => {
                    // Stdout is reserved for the report; notices go to stderr.
                    eprintln!("Loaded configuration for station: {}", config.station.name);
                    config
                }
                Err(e) => {
                    eprintln!("Warning: Invalid config file format: {}", e);
                    eprintln!("Using default configuration (Santa Cruz, CA)");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Save current configuration to tide-config.toml
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let contents = toml::to_string_pretty(self)?;
        fs::write("tide-config.toml", contents)?;
        eprintln!("Configuration saved to tide-config.toml");
        Ok(())
    }
}
