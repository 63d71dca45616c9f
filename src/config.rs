//! # Service Configuration
//!
//! Loaded from an optional JSON file; every field has a default.
//! Environment variables override the file:
//!
//! - `PORT` - listen port
//! - `JWT_SECRET` - token signing secret
//! - `REALTYDASH_DATA_FILE` - JSON array of listing records

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Duration;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::auth::JwtConfig;
use crate::http_server::HttpServerConfig;
use crate::table::{PageLimits, DEFAULT_LIMIT, MAX_LIMIT};

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid environment variable {key}: {value}")]
    InvalidEnv { key: String, value: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Complete service configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(flatten)]
    pub server: HttpServerConfig,

    /// Token signing secret
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,

    /// Token lifetime in hours (default 24)
    #[serde(default = "default_token_ttl_hours")]
    pub token_ttl_hours: u32,

    #[serde(default = "default_token_party")]
    pub issuer: String,

    #[serde(default = "default_token_party")]
    pub audience: String,

    /// Listing data file; sample listings when absent
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    #[serde(default = "default_page_size")]
    pub default_page_size: u32,

    #[serde(default = "default_max_page_size")]
    pub max_page_size: u32,
}

fn default_jwt_secret() -> String {
    "your-secret-key".to_string()
}

fn default_token_ttl_hours() -> u32 {
    24
}

fn default_token_party() -> String {
    "realtydash".to_string()
}

fn default_page_size() -> u32 {
    DEFAULT_LIMIT
}

fn default_max_page_size() -> u32 {
    MAX_LIMIT
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: HttpServerConfig::default(),
            jwt_secret: default_jwt_secret(),
            token_ttl_hours: default_token_ttl_hours(),
            issuer: default_token_party(),
            audience: default_token_party(),
            data_file: None,
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
        }
    }
}

impl AppConfig {
    /// Load from a JSON file (when it exists), apply environment
    /// overrides, then validate.
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        let mut config = match path {
            Some(path) if path.exists() => Self::from_file(path)?,
            Some(path) => {
                info!(path = %path.display(), "config file not found, using defaults");
                Self::default()
            }
            None => Self::default(),
        };

        config.apply_overrides(|key| env::var(key).ok())?;
        config.validate()?;

        Ok(config)
    }

    /// Parse a JSON config file without overrides or validation
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Apply overrides from a variable lookup (the process environment in
    /// production)
    pub fn apply_overrides<F>(&mut self, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT") {
            self.server.port = port.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                key: "PORT".to_string(),
                value: port.clone(),
            })?;
        }

        match lookup("JWT_SECRET") {
            Some(secret) => self.jwt_secret = secret,
            None if self.jwt_secret == default_jwt_secret() => {
                warn!("JWT_SECRET not set, using the development secret");
            }
            None => {}
        }

        if let Some(file) = lookup("REALTYDASH_DATA_FILE") {
            self.data_file = Some(PathBuf::from(file));
        }

        Ok(())
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.jwt_secret.is_empty() {
            return Err(ConfigError::Invalid("jwt_secret must not be empty".to_string()));
        }
        if self.token_ttl_hours == 0 {
            return Err(ConfigError::Invalid("token_ttl_hours must be > 0".to_string()));
        }
        if self.default_page_size == 0 || self.max_page_size == 0 {
            return Err(ConfigError::Invalid("page sizes must be > 0".to_string()));
        }
        if self.default_page_size > self.max_page_size {
            return Err(ConfigError::Invalid(format!(
                "default_page_size {} exceeds max_page_size {}",
                self.default_page_size, self.max_page_size
            )));
        }
        Ok(())
    }

    pub fn jwt_config(&self) -> JwtConfig {
        JwtConfig {
            secret: self.jwt_secret.clone(),
            token_ttl: Duration::hours(i64::from(self.token_ttl_hours)),
            issuer: self.issuer.clone(),
            audience: self.audience.clone(),
        }
    }

    pub fn page_limits(&self) -> PageLimits {
        PageLimits {
            default_limit: self.default_page_size,
            max_limit: self.max_page_size,
        }
    }
}
