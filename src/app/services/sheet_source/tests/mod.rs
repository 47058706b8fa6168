//! Tests for the data source adapter
//!
//! Provides an in-memory source and sample exports shared by the test modules.

mod service_tests;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::app::services::sheet_source::TabularSource;
use crate::{Error, Result};

/// Sample export in the scenario layout: timestamp, date, site
pub const SCENARIO_EXPORT: &str =
    "Timestamp,Date,Site\n1,2024-05-01,Blue Hole\n2,2024-05-02,Wreck Point\n";

/// In-memory source returning a fixed body or a fixed failure
#[derive(Debug, Clone)]
pub struct StaticSource {
    body: Option<String>,
    calls: Arc<AtomicUsize>,
}

impl StaticSource {
    pub fn ok(body: &str) -> Self {
        Self {
            body: Some(body.to_string()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing() -> Self {
        Self {
            body: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl TabularSource for StaticSource {
    fn describe(&self) -> String {
        "static test source".to_string()
    }

    async fn fetch_text(&self) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.body
            .clone()
            .ok_or_else(|| Error::http_status("http://static.test/export", 503))
    }
}
