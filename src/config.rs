//! Runtime configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `INVENTORY_LOW_STOCK_THRESHOLD` - Stock level at or below which a product is flagged (default: 10)
//! - `INVENTORY_CHANNEL_BUFFER` - Capacity of the catalog actor's request channel (default: 32)
//!
//! A `.env` file in the working directory is honoured.

use std::str::FromStr;

use thiserror::Error;

pub const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 10;
pub const DEFAULT_CHANNEL_BUFFER: usize = 32;

const LOW_STOCK_THRESHOLD_VAR: &str = "INVENTORY_LOW_STOCK_THRESHOLD";
const CHANNEL_BUFFER_VAR: &str = "INVENTORY_CHANNEL_BUFFER";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Channel buffer must be at least 1")]
    ZeroChannelBuffer,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InventoryConfig {
    pub low_stock_threshold: u32,
    pub channel_buffer: usize,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
            channel_buffer: DEFAULT_CHANNEL_BUFFER,
        }
    }
}

impl InventoryConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but does not parse, or if the
    /// resulting configuration is invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            low_stock_threshold: parse_var(&lookup, LOW_STOCK_THRESHOLD_VAR)?
                .unwrap_or(defaults.low_stock_threshold),
            channel_buffer: parse_var(&lookup, CHANNEL_BUFFER_VAR)?.unwrap_or(defaults.channel_buffer),
        };
        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides on top of the loaded values.
    pub fn with_overrides(
        mut self,
        low_stock_threshold: Option<u32>,
        channel_buffer: Option<usize>,
    ) -> Result<Self, ConfigError> {
        if let Some(threshold) = low_stock_threshold {
            self.low_stock_threshold = threshold;
        }
        if let Some(buffer) = channel_buffer {
            self.channel_buffer = buffer;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.channel_buffer == 0 {
            return Err(ConfigError::ZeroChannelBuffer);
        }
        Ok(())
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e: T::Err| ConfigError::InvalidEnvVar(key.to_string(), e.to_string())),
    }
}
