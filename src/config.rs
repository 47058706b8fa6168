//! Configuration management and validation.
//!
//! Provides the data source coordinates and insight service settings. There
//! is no configuration file: values come from defaults, the environment (API
//! key only) and command-line flags.

use crate::constants::{
    API_KEY_ENV_VARS, DEFAULT_INSIGHT_MODEL, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_SHEET_ID,
    DEFAULT_TAB_NAME, GEMINI_BASE_URL, SHEETS_BASE_URL,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

/// Global configuration for the log book
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogbookConfig {
    /// Published spreadsheet identifier
    pub sheet_id: String,

    /// Tab holding the form responses
    pub tab_name: String,

    /// Base URL the export path is appended to
    pub sheets_base_url: String,

    /// Read a local CSV export instead of the published sheet
    pub csv_file: Option<PathBuf>,

    /// Timeout applied to every outbound request
    pub request_timeout: Duration,

    /// Insight service settings
    pub insight: InsightConfig,
}

/// Settings for the optional insight service
#[derive(Clone, Serialize, Deserialize)]
pub struct InsightConfig {
    /// Request insights for displayed dives
    pub enabled: bool,

    /// API key; insights are skipped without one
    #[serde(skip_serializing)]
    pub api_key: Option<String>,

    /// Model name used in the generateContent path
    pub model: String,

    /// Base URL of the Generative Language API
    pub base_url: String,
}

impl fmt::Debug for InsightConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InsightConfig")
            .field("enabled", &self.enabled)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            api_key: None,
            model: DEFAULT_INSIGHT_MODEL.to_string(),
            base_url: GEMINI_BASE_URL.to_string(),
        }
    }
}

impl Default for LogbookConfig {
    fn default() -> Self {
        Self {
            sheet_id: DEFAULT_SHEET_ID.to_string(),
            tab_name: DEFAULT_TAB_NAME.to_string(),
            sheets_base_url: SHEETS_BASE_URL.to_string(),
            csv_file: None,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            insight: InsightConfig::default(),
        }
    }
}

impl LogbookConfig {
    /// Defaults plus the insight API key from the environment, if set
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.insight.api_key = api_key_from_env();
        config
    }

    /// Use a different spreadsheet
    pub fn with_sheet_id(mut self, sheet_id: impl Into<String>) -> Self {
        self.sheet_id = sheet_id.into();
        self
    }

    /// Use a different response tab
    pub fn with_tab_name(mut self, tab_name: impl Into<String>) -> Self {
        self.tab_name = tab_name.into();
        self
    }

    /// Point the export request at a different host
    pub fn with_sheets_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.sheets_base_url = base_url.into();
        self
    }

    /// Read records from a local CSV export
    pub fn with_csv_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.csv_file = Some(path.into());
        self
    }

    /// Set the outbound request timeout
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Enable insight requests
    pub fn with_insights(mut self) -> Self {
        self.insight.enabled = true;
        self
    }

    /// Set the insight model
    pub fn with_insight_model(mut self, model: impl Into<String>) -> Self {
        self.insight.model = model.into();
        self
    }

    /// Set the insight API key explicitly
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.insight.api_key = Some(api_key.into());
        self
    }

    /// Point insight requests at a different host
    pub fn with_insight_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.insight.base_url = base_url.into();
        self
    }

    /// Check the configuration for values that cannot work
    pub fn validate(&self) -> Result<()> {
        if self.csv_file.is_none() {
            if self.sheet_id.trim().is_empty() {
                return Err(Error::configuration("sheet id must not be empty"));
            }
            if self.tab_name.trim().is_empty() {
                return Err(Error::configuration("tab name must not be empty"));
            }
        }

        if self.request_timeout.is_zero() {
            return Err(Error::configuration("request timeout must be greater than zero"));
        }

        if self.insight.enabled && self.insight.model.trim().is_empty() {
            return Err(Error::configuration("insight model must not be empty"));
        }

        debug!("Configuration validated");
        Ok(())
    }
}

/// First non-empty API key among the supported environment variables
pub fn api_key_from_env() -> Option<String> {
    API_KEY_ENV_VARS.iter().find_map(|name| {
        std::env::var(name)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    })
}
