//! Parser for the dive log CSV export
//!
//! The response sheet is exported as loosely-quoted CSV with one header row.
//! Rows are decoded positionally into [`DiveEntry`](crate::app::models::DiveEntry)
//! values; nothing in this module ever fails, malformed lines are skipped and
//! counted instead.
//!
//! ## Architecture
//!
//! - [`tokenizer`] - Splits one physical line into cleaned field tokens
//! - [`column_mapping`] - The single table mapping token positions to record fields
//! - [`record_parser`] - Turns one line into zero or one record
//! - [`parser`] - Drives the record parser over a full export, newest row first
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use dive_logbook::app::services::sheet_parser::parse_sheet;
//!
//! let result = parse_sheet("Timestamp,Date,Site\n1,2024-05-01,Blue Hole\n");
//! assert_eq!(result.entries.len(), 1);
//! assert_eq!(result.entries[0].dive_site, "Blue Hole");
//! ```

pub mod column_mapping;
pub mod parser;
pub mod record_parser;
pub mod stats;
pub mod tokenizer;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use column_mapping::DiveColumn;
pub use parser::parse_sheet;
pub use record_parser::{LineOutcome, parse_line};
pub use stats::{ParseResult, ParseStats};
