//! Application configuration loading from config.toml
//!
//! Every setting has a default, so the service starts without a config file.
//! Environment variables (optionally from `.env`) override whatever the file says.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Config file used when `RESERVATION_CONFIG` is not set
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Top-level structure of config.toml
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP listener settings
    pub server: ServerConfig,
    /// Dataset location
    pub data: DataConfig,
    /// Summary cache settings
    pub cache: CacheConfig,
}

/// HTTP listener settings
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to listen on
    pub bind_address: String,
    /// Single origin allowed to make credentialed cross-origin requests
    pub cors_origin: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:5000".to_string(),
            cors_origin: "http://localhost:3000".to_string(),
        }
    }
}

/// Dataset location
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DataConfig {
    /// Directory holding `product_assignment.json` and `product_charges.json`
    pub directory: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("db"),
        }
    }
}

/// Summary cache settings
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct CacheConfig {
    /// Seconds a computed summary list stays fresh
    pub ttl_seconds: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { ttl_seconds: 300 }
    }
}

impl CacheConfig {
    /// TTL as a [`Duration`]
    #[must_use]
    pub const fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_seconds)
    }
}

impl AppConfig {
    /// Applies environment overrides, looking each key up through `lookup`.
    ///
    /// Recognized keys: `RESERVATION_DATA_DIR`, `BIND_ADDRESS`, `CORS_ORIGIN`,
    /// `CACHE_TTL_SECONDS`.
    ///
    /// # Errors
    /// Returns an error if `CACHE_TTL_SECONDS` is set but not a whole number.
    pub fn apply_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup("RESERVATION_DATA_DIR") {
            self.data.directory = PathBuf::from(dir);
        }
        if let Some(addr) = lookup("BIND_ADDRESS") {
            self.server.bind_address = addr;
        }
        if let Some(origin) = lookup("CORS_ORIGIN") {
            self.server.cors_origin = origin;
        }
        if let Some(ttl) = lookup("CACHE_TTL_SECONDS") {
            self.cache.ttl_seconds = ttl.trim().parse().map_err(|e| Error::Config {
                message: format!("Invalid CACHE_TTL_SECONDS '{ttl}': {e}"),
            })?;
        }
        Ok(self)
    }
}

/// Loads configuration from a TOML file
///
/// # Errors
/// Returns an error if the file cannot be read or the TOML is invalid.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path_ref.display()),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse {}: {e}", path_ref.display()),
    })
}

/// Loads the full application configuration.
///
/// Reads the file named by `RESERVATION_CONFIG` (default `config.toml`), falling
/// back to defaults when it does not exist, then applies environment overrides.
///
/// # Errors
/// Returns an error if an existing config file is invalid or an override is malformed.
pub fn load_app_configuration() -> Result<AppConfig> {
    let path = std::env::var("RESERVATION_CONFIG")
        .map_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);

    let file_config = if path.exists() {
        load_config(&path)?
    } else {
        warn!(
            "Config file {} not found, using built-in defaults",
            path.display()
        );
        AppConfig::default()
    };

    let config = file_config.apply_overrides(|key| std::env::var(key).ok())?;
    info!(
        "Configuration loaded: bind={}, data_dir={}, cache_ttl={}s",
        config.server.bind_address,
        config.data.directory.display(),
        config.cache.ttl_seconds
    );
    Ok(config)
}
