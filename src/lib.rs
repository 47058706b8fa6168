//! Dive Log Book Library
//!
//! A Rust library for presenting scuba dive log entries recorded through a
//! Google Form into a shared spreadsheet.
//!
//! This library provides tools for:
//! - Fetching the published CSV export of the response sheet
//! - Parsing loosely-structured rows into typed dive records
//! - Grouping records by session date and selecting a session
//! - Requesting optional AI-generated dive insights
//! - Rendering the log book to a terminal
//!
//! Every failure on the data path degrades to an empty result plus a log
//! line; the typed [`Error`] is only surfaced for configuration and CLI
//! argument problems.

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod state;
    pub mod view;
    pub mod services {
        pub mod insight;
        pub mod selection;
        pub mod sheet_parser;
        pub mod sheet_source;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use app::models::{DiveEntry, GeminiInsight};
pub use config::LogbookConfig;

/// Result type alias for the dive log book
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for dive log book operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// HTTP transport error
    #[error("HTTP request failed: {message}")]
    Http {
        message: String,
        #[source]
        source: reqwest::Error,
    },

    /// Remote endpoint answered with a non-success status
    #[error("HTTP {status} from {url}")]
    HttpStatus { url: String, status: u16 },

    /// Remote endpoint answered with something other than CSV text
    #[error("Unexpected content type '{content_type}' from {url}")]
    UnexpectedContent { url: String, content_type: String },

    /// URL could not be built
    #[error("Invalid URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    /// JSON encoding or decoding error
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Insight response did not carry a usable result
    #[error("Insight response error: {message}")]
    InsightResponse { message: String },

    /// Run interrupted by the user
    #[error("Interrupted: {message}")]
    Interrupted { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an HTTP transport error with context
    pub fn http(message: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Http {
            message: message.into(),
            source,
        }
    }

    /// Create a non-success status error
    pub fn http_status(url: impl Into<String>, status: u16) -> Self {
        Self::HttpStatus {
            url: url.into(),
            status,
        }
    }

    /// Create an unexpected content error
    pub fn unexpected_content(url: impl Into<String>, content_type: impl Into<String>) -> Self {
        Self::UnexpectedContent {
            url: url.into(),
            content_type: content_type.into(),
        }
    }

    /// Create an invalid URL error
    pub fn invalid_url(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a JSON error with context
    pub fn json(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an insight response error
    pub fn insight_response(message: impl Into<String>) -> Self {
        Self::InsightResponse {
            message: message.into(),
        }
    }

    /// Create an interruption error
    pub fn interrupted(message: impl Into<String>) -> Self {
        Self::Interrupted {
            message: message.into(),
        }
    }
}
