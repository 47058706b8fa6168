//! Data source adapter for the dive log
//!
//! Retrieves the raw CSV export and turns it into records through the sheet
//! parser. Retrieval is abstracted behind [`TabularSource`] so the published
//! sheet and a local export share the same pipeline.
//!
//! - [`google_sheet`] - HTTP export of the published Google Sheet
//! - [`csv_file`] - Local CSV export on disk
//! - [`service`] - Fetch-and-parse pipeline with the degrade-to-empty policy

pub mod csv_file;
pub mod google_sheet;
pub mod service;

#[cfg(test)]
pub mod tests;

use std::future::Future;

use crate::Result;
use crate::config::LogbookConfig;

pub use csv_file::CsvFileSource;
pub use google_sheet::GoogleSheetSource;
pub use service::{DiveLogService, FetchOutcome};

/// Anything that can produce the full CSV export as text
pub trait TabularSource {
    /// Short human-readable description for log lines
    fn describe(&self) -> String;

    /// Retrieve the complete export, header row included
    fn fetch_text(&self) -> impl Future<Output = Result<String>> + Send;
}

/// Source selected from configuration at runtime
#[derive(Debug, Clone)]
pub enum SheetSource {
    Google(GoogleSheetSource),
    File(CsvFileSource),
}

impl SheetSource {
    /// Local file when one is configured, the published sheet otherwise
    pub fn from_config(config: &LogbookConfig) -> Result<Self> {
        match &config.csv_file {
            Some(path) => Ok(SheetSource::File(CsvFileSource::new(path.clone()))),
            None => Ok(SheetSource::Google(GoogleSheetSource::new(config)?)),
        }
    }
}

impl TabularSource for SheetSource {
    fn describe(&self) -> String {
        match self {
            SheetSource::Google(source) => source.describe(),
            SheetSource::File(source) => source.describe(),
        }
    }

    async fn fetch_text(&self) -> Result<String> {
        match self {
            SheetSource::Google(source) => source.fetch_text().await,
            SheetSource::File(source) => source.fetch_text().await,
        }
    }
}
