//! Individual row parsing for the dive log export
//!
//! This module turns one physical line into zero or one [`DiveEntry`],
//! classifying the lines it skips so the caller can account for them.

use tracing::trace;

use super::column_mapping::{DiveColumn, assign_columns};
use super::tokenizer::tokenize_line;
use crate::app::models::DiveEntry;

/// What a single line produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// A record was decoded; `short` is set when the row had fewer tokens
    /// than the column layout and some fields took their fallback
    Record { entry: DiveEntry, short: bool },

    /// Empty or whitespace-only line
    Blank,

    /// Non-blank line without any field content
    Untokenizable,
}

impl LineOutcome {
    /// The decoded record, if any
    pub fn into_entry(self) -> Option<DiveEntry> {
        match self {
            LineOutcome::Record { entry, .. } => Some(entry),
            LineOutcome::Blank | LineOutcome::Untokenizable => None,
        }
    }
}

/// Classify and decode one line
pub fn parse_record(line: &str) -> LineOutcome {
    if line.trim().is_empty() {
        return LineOutcome::Blank;
    }

    let tokens = tokenize_line(line);
    if tokens.is_empty() {
        trace!("No field content in line: {:?}", line);
        return LineOutcome::Untokenizable;
    }

    let short = tokens.len() < DiveColumn::ROW_WIDTH;
    LineOutcome::Record {
        entry: assign_columns(&tokens),
        short,
    }
}

/// Decode one line into a record, skipping blank and untokenizable lines
pub fn parse_line(line: &str) -> Option<DiveEntry> {
    parse_record(line).into_entry()
}
