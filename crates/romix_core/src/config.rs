//! Per-feature runtime options.
//!
//! # Responsibility
//! - Hold page size and logging toggle for one feed pipeline.
//! - Apply environment overrides with strict parsing.
//!
//! # Invariants
//! - Configuration is passed explicitly; there is no process-wide instance.
//! - `page_size` stays within `1..=MAX_PAGE_SIZE` once validated.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const MAX_PAGE_SIZE: u32 = 500;

/// Environment key overriding `page_size`.
pub const ENV_PAGE_SIZE: &str = "ROMIX_PAGE_SIZE";
/// Environment key overriding `enable_logging`.
pub const ENV_ENABLE_LOGGING: &str = "ROMIX_ENABLE_LOGGING";

/// Options for one feature's repository and service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureConfig {
    /// Posts requested per snapshot.
    pub page_size: u32,
    /// Emit repository/service diagnostic events.
    pub enable_logging: bool,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            enable_logging: true,
        }
    }
}

impl FeatureConfig {
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_logging(mut self, enable_logging: bool) -> Self {
        self.enable_logging = enable_logging;
        self
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 || self.page_size > MAX_PAGE_SIZE {
            return Err(ConfigError::InvalidPageSize(self.page_size));
        }
        Ok(())
    }

    /// Builds defaults overridden by the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds defaults overridden by `lookup(key)`.
    ///
    /// Blank values are treated as unset.
    ///
    /// # Errors
    /// - Returns `InvalidValue` when a value does not parse.
    /// - Returns `InvalidPageSize` when the parsed page size is out of range.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = non_blank(lookup(ENV_PAGE_SIZE)) {
            config.page_size = raw
                .parse::<u32>()
                .map_err(|_| ConfigError::InvalidValue {
                    key: ENV_PAGE_SIZE,
                    value: raw.clone(),
                })?;
        }

        if let Some(raw) = non_blank(lookup(ENV_ENABLE_LOGGING)) {
            config.enable_logging =
                parse_flag(&raw).ok_or_else(|| ConfigError::InvalidValue {
                    key: ENV_ENABLE_LOGGING,
                    value: raw.clone(),
                })?;
        }

        config.validate()?;
        Ok(config)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|raw| !raw.is_empty())
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration validation and parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidPageSize(u32),
    InvalidValue { key: &'static str, value: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPageSize(value) => write!(
                f,
                "page_size must be between 1 and {MAX_PAGE_SIZE}, got {value}"
            ),
            Self::InvalidValue { key, value } => {
                write!(f, "invalid value `{value}` for {key}")
            }
        }
    }
}

impl Error for ConfigError {}
