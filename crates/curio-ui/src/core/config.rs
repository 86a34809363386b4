//! Client-side configuration for listings.
//!
//! # Design
//! - Missing fields fall back to defaults so partial payloads stay valid.
//! - Validation runs after parsing; callers decide whether to fall back.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rows per page when nothing is configured.
pub const DEFAULT_PER_PAGE: u32 = 20;
/// Largest page size the catalogue API accepts.
pub const MAX_PER_PAGE: u32 = 100;

/// Errors raised while loading [`UiConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Payload was not valid JSON for the config shape.
    #[error("failed to parse ui config")]
    Parse(#[from] serde_json::Error),
    /// Field contained an invalid value.
    #[error("invalid ui config field `{field}` = {value}: {reason}")]
    InvalidField {
        /// Name of the offending field.
        field: &'static str,
        /// Offending value.
        value: String,
        /// Machine-readable reason for the failure.
        reason: &'static str,
    },
}

/// Listing preferences stored by the client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Rows requested per page.
    pub per_page: u32,
    /// Show the "N results" summary next to the pagination control.
    pub show_result_count: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
            show_result_count: true,
        }
    }
}

impl UiConfig {
    /// Parse and validate a JSON payload.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::InvalidField`] when a value is out of range.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check field ranges.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidField`] when `per_page` is outside `1..=100`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.per_page == 0 || self.per_page > MAX_PER_PAGE {
            return Err(ConfigError::InvalidField {
                field: "per_page",
                value: self.per_page.to_string(),
                reason: "must be between 1 and 100",
            });
        }
        Ok(())
    }
}
