//! # Shop Configuration
//!
//! The immutable rule data the flows run against: coupon catalog,
//! jurisdiction table, business hours. Loaded once at start-up.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     SHOPKIT_OPEN_HOUR=9                                                │
//! │     SHOPKIT_CLOSE_HOUR=17                                              │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/shopkit/shop.toml (Linux)                                │
//! │     ~/Library/Application Support/dev.shopkit.shopkit/shop.toml (macOS)│
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     SAVE10/SAVE20, US 16 / UK 17, 08:00-20:00                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [coupons]
//! catalog = [
//!     { code = "SAVE10", discount_bps = 1000 },
//!     { code = "SAVE20", discount_bps = 2000 },
//! ]
//!
//! [driving]
//! minimum_ages = { US = 16, UK = 17 }
//!
//! [hours]
//! open_hour = 8
//! close_hour = 20
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

use shopkit_core::{BusinessHours, CouponCatalog, DrivingRules, ValidationError};

/// Environment variable overriding `hours.open_hour`.
pub const ENV_OPEN_HOUR: &str = "SHOPKIT_OPEN_HOUR";

/// Environment variable overriding `hours.close_hour`.
pub const ENV_CLOSE_HOUR: &str = "SHOPKIT_CLOSE_HOUR";

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to write config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ValidationError),

    #[error("No config path available")]
    NoPath,
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Complete shop configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopConfig {
    /// Coupons customers may redeem.
    #[serde(default)]
    pub coupons: CouponCatalog,

    /// Minimum driving age per country code.
    #[serde(default)]
    pub driving: DrivingRules,

    /// Opening window for `is_online`.
    #[serde(default)]
    pub hours: BusinessHours,
}

impl ShopConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (shop.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading shop config from file");
                config = Self::from_file(&path)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load shop config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Parses one TOML file, without overrides or validation.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> ConfigResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or(ConfigError::NoPath)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;

        info!(?path, "Shop config saved");
        Ok(())
    }

    /// Validates every section.
    pub fn validate(&self) -> ConfigResult<()> {
        self.coupons.validate()?;
        self.driving.validate()?;
        self.hours.validate()?;
        Ok(())
    }

    /// Applies overrides read through `lookup` (the process environment in
    /// `load`). Unparsable values are an error, not silently ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_OPEN_HOUR) {
            self.hours.open_hour = parse_hour(ENV_OPEN_HOUR, &value)?;
            debug!(open_hour = self.hours.open_hour, "Overriding opening hour from environment");
        }

        if let Some(value) = lookup(ENV_CLOSE_HOUR) {
            self.hours.close_hour = parse_hour(ENV_CLOSE_HOUR, &value)?;
            debug!(close_hour = self.hours.close_hour, "Overriding closing hour from environment");
        }

        Ok(())
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("dev", "shopkit", "shopkit")
            .map(|dirs| dirs.config_dir().join("shop.toml"))
    }
}

fn parse_hour(key: &str, value: &str) -> ConfigResult<u32> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| ConfigError::InvalidValue(key.to_string()))
}
