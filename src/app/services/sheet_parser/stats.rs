//! Parsing statistics and result structures for the dive log export
//!
//! This module provides types for tracking how many lines produced records
//! and why the rest were skipped.

use crate::app::models::DiveEntry;

/// Parsing result with records and basic statistics
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseResult {
    /// Decoded records, most recently submitted row first
    pub entries: Vec<DiveEntry>,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

/// Simple parsing statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Data lines examined (header excluded)
    pub lines_read: usize,

    /// Records produced
    pub records_parsed: usize,

    /// Empty or whitespace-only lines
    pub blank_lines: usize,

    /// Non-blank lines without any field content
    pub untokenizable_lines: usize,

    /// Records decoded from rows narrower than the column layout
    pub short_rows: usize,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines that did not produce a record
    pub fn lines_skipped(&self) -> usize {
        self.blank_lines + self.untokenizable_lines
    }

    /// Share of non-blank lines that produced a record, as a percentage
    pub fn success_rate(&self) -> f64 {
        let candidates = self.lines_read - self.blank_lines;
        if candidates == 0 {
            0.0
        } else {
            (self.records_parsed as f64 / candidates as f64) * 100.0
        }
    }
}
