//! Data models for the dive log book
//!
//! This module contains the record type produced from each spreadsheet row and
//! the advisory note returned by the insight service.

use crate::constants::UNKNOWN_SITE;
use serde::{Deserialize, Serialize};

// =============================================================================
// Dive Entry
// =============================================================================

/// One dive as logged through the response form
///
/// Every field except `dive_site` is an opaque string. Missing values are
/// stored as the empty string; placeholders are a rendering concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiveEntry {
    /// Session label grouping the dives of one outing
    pub date: String,

    /// Dive site name, `"Unknown Site"` when the row carries none
    pub dive_site: String,

    /// Bottom time as entered by the guide
    pub total_time: String,

    pub max_depth: String,
    pub avg_depth: String,
    pub water_temp: String,
    pub visibility: String,

    /// Current strength (e.g. "Mild", "Strong")
    pub current: String,

    /// Surface wave action
    pub waves: String,

    pub guide: String,

    /// Breathing gas (e.g. "Air", "Nitrox 32")
    pub type_of_air: String,
}

impl Default for DiveEntry {
    fn default() -> Self {
        Self {
            date: String::new(),
            dive_site: UNKNOWN_SITE.to_string(),
            total_time: String::new(),
            max_depth: String::new(),
            avg_depth: String::new(),
            water_temp: String::new(),
            visibility: String::new(),
            current: String::new(),
            waves: String::new(),
            guide: String::new(),
            type_of_air: String::new(),
        }
    }
}

impl DiveEntry {
    /// Environmental conditions of this dive, the only input to insight requests
    pub fn conditions(&self) -> DiveConditions<'_> {
        DiveConditions {
            dive_site: &self.dive_site,
            visibility: &self.visibility,
            water_temp: &self.water_temp,
            current: &self.current,
            waves: &self.waves,
        }
    }
}

/// Borrowed view of the five environmental fields of a [`DiveEntry`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiveConditions<'a> {
    pub dive_site: &'a str,
    pub visibility: &'a str,
    pub water_temp: &'a str,
    pub current: &'a str,
    pub waves: &'a str,
}

// =============================================================================
// Insight
// =============================================================================

/// Advisory note generated for a single dive
///
/// All three fields are required by deserialization; a response lacking any
/// of them does not produce a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeminiInsight {
    pub title: String,
    pub content: String,
    pub advice: String,
}

impl GeminiInsight {
    /// True when every field carries visible text
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty()
            && !self.content.trim().is_empty()
            && !self.advice.trim().is_empty()
    }
}
