//! Configuration management
//!
//! Loaded from a TOML file passed on the command line; every field has a
//! default so the server also starts with no file at all. The geocoder
//! access key can be overridden with the `GEOCODER_API_KEY` environment
//! variable so it never has to live in the file.

use crate::constants::{api, paging};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Environment variable overriding the geocoder access key
pub const GEOCODER_API_KEY_ENV: &str = "GEOCODER_API_KEY";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Reverse-geocoder settings
    #[serde(default)]
    pub geocoder: GeocoderConfig,

    /// Pagination settings
    #[serde(default)]
    pub paging: PagingConfig,
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Reverse-geocoder settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocoderConfig {
    /// Reverse-geocoding endpoint
    #[serde(default = "default_geocoder_endpoint")]
    pub endpoint: String,

    /// API access key
    #[serde(default)]
    pub access_key: String,
}

/// Pagination settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagingConfig {
    /// Listings per page in nearby results
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Listings per display carousel
    #[serde(default = "default_carousel_size")]
    pub carousel_size: usize,

    /// Ranked listings fetched for the carousel view
    #[serde(default = "default_carousel_limit")]
    pub carousel_limit: usize,
}

// Default value functions for serde
fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    8080
}
fn default_geocoder_endpoint() -> String {
    api::POSITIONSTACK_URL.to_string()
}
fn default_page_size() -> usize {
    paging::DEFAULT_PAGE_SIZE
}
fn default_carousel_size() -> usize {
    paging::DEFAULT_CAROUSEL_SIZE
}
fn default_carousel_limit() -> usize {
    paging::DEFAULT_CAROUSEL_LIMIT
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            endpoint: default_geocoder_endpoint(),
            access_key: String::new(),
        }
    }
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            carousel_size: default_carousel_size(),
            carousel_limit: default_carousel_limit(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file, then apply env overrides
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read config file: {}", e)))?;

        let mut config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config file: {}", e)))?;

        config.apply_env();
        Ok(config)
    }

    /// Load from a file when given one, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let mut config = Self::default();
                config.apply_env();
                Ok(config)
            }
        }
    }

    fn apply_env(&mut self) {
        if let Ok(key) = std::env::var(GEOCODER_API_KEY_ENV) {
            if !key.is_empty() {
                self.geocoder.access_key = key;
            }
        }
    }

    /// Override the bind address from a "host:port" string
    pub fn set_bind_addr(&mut self, addr: &str) -> Result<()> {
        let (host, port) = addr
            .rsplit_once(':')
            .ok_or_else(|| Error::Config(format!("Invalid bind address: {}", addr)))?;

        self.server.host = host.to_string();
        self.server.port = port
            .parse()
            .map_err(|_| Error::Config(format!("Invalid port: {}", port)))?;
        Ok(())
    }

    /// Get server address as "host:port"
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
