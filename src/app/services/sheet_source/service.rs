//! Fetch-and-parse pipeline for the dive log
//!
//! Failures never reach the caller as errors. They are logged and reported
//! as [`FetchOutcome::Failed`], which still reads as an empty collection for
//! callers that only want records.

use std::time::Instant;

use tracing::{error, info, warn};

use super::TabularSource;
use crate::app::models::DiveEntry;
use crate::app::services::sheet_parser::{ParseStats, parse_sheet};

/// Result of one fetch
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// The export was retrieved; `entries` may legitimately be empty
    Loaded {
        entries: Vec<DiveEntry>,
        stats: ParseStats,
    },

    /// The export could not be retrieved
    Failed { reason: String },
}

impl FetchOutcome {
    /// Records carried by this outcome, empty on failure
    pub fn entries(&self) -> &[DiveEntry] {
        match self {
            FetchOutcome::Loaded { entries, .. } => entries,
            FetchOutcome::Failed { .. } => &[],
        }
    }

    /// Consume the outcome, yielding an empty collection on failure
    pub fn into_entries(self) -> Vec<DiveEntry> {
        match self {
            FetchOutcome::Loaded { entries, .. } => entries,
            FetchOutcome::Failed { .. } => Vec::new(),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FetchOutcome::Failed { .. })
    }
}

/// Drives a [`TabularSource`] through the sheet parser
#[derive(Debug, Clone)]
pub struct DiveLogService<S> {
    source: S,
}

impl<S: TabularSource> DiveLogService<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Retrieve and parse the export, newest record first
    pub async fn fetch(&self) -> FetchOutcome {
        let start_time = Instant::now();
        info!("Syncing log book from {}", self.source.describe());

        let text = match self.source.fetch_text().await {
            Ok(text) => text,
            Err(e) => {
                error!("Error fetching dive data: {:#}", e);
                return FetchOutcome::Failed {
                    reason: e.to_string(),
                };
            }
        };

        let result = parse_sheet(&text);
        if result.stats.untokenizable_lines > 0 {
            warn!(
                "{} lines had no field content and were skipped",
                result.stats.untokenizable_lines
            );
        }

        info!(
            "Loaded {} dives in {}ms",
            result.entries.len(),
            start_time.elapsed().as_millis()
        );

        FetchOutcome::Loaded {
            entries: result.entries,
            stats: result.stats,
        }
    }

    /// Retrieve and parse the export, returning no records on failure
    pub async fn fetch_dive_data(&self) -> Vec<DiveEntry> {
        self.fetch().await.into_entries()
    }
}
