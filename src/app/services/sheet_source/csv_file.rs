//! Local CSV export on disk

use std::path::PathBuf;

use super::TabularSource;
use crate::{Error, Result};

/// CSV export previously downloaded from the response sheet
#[derive(Debug, Clone)]
pub struct CsvFileSource {
    path: PathBuf,
}

impl CsvFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TabularSource for CsvFileSource {
    fn describe(&self) -> String {
        format!("local export {}", self.path.display())
    }

    async fn fetch_text(&self) -> Result<String> {
        tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            Error::io(
                format!("Failed to read CSV export {}", self.path.display()),
                e,
            )
        })
    }
}
