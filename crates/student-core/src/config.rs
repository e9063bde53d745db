//! Dashboard Configuration

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/students";
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u32 = 300;
pub const DEFAULT_TOAST_DURATION_MS: u32 = 3000;
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid dashboard config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Runtime settings. Missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Backend mount point; routes are joined onto it
    pub api_base_url: String,
    pub search_debounce_ms: u32,
    pub toast_duration_ms: u32,
    pub currency_symbol: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }
}

impl DashboardConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}
