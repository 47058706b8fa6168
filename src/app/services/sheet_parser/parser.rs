//! Export-level parsing
//!
//! Drops the header row, decodes every remaining line and returns the records
//! newest first.

use tracing::debug;

use super::record_parser::{LineOutcome, parse_record};
use super::stats::{ParseResult, ParseStats};

/// Parse a complete CSV export
///
/// The first line is always treated as the header and discarded regardless of
/// its content. Rows are appended in file order and the result is reversed, so
/// the last submitted row comes first.
pub fn parse_sheet(csv_text: &str) -> ParseResult {
    let mut stats = ParseStats::new();
    let mut entries = Vec::new();

    for line in csv_text.split('\n').skip(1) {
        stats.lines_read += 1;

        match parse_record(line) {
            LineOutcome::Record { entry, short } => {
                if short {
                    stats.short_rows += 1;
                }
                stats.records_parsed += 1;
                entries.push(entry);
            }
            LineOutcome::Blank => stats.blank_lines += 1,
            LineOutcome::Untokenizable => {
                stats.untokenizable_lines += 1;
                debug!("Skipped line {}: no field content", stats.lines_read + 1);
            }
        }
    }

    entries.reverse();

    debug!(
        "Parsed {} records from {} lines ({} skipped, {} short)",
        stats.records_parsed,
        stats.lines_read,
        stats.lines_skipped(),
        stats.short_rows
    );

    ParseResult { entries, stats }
}
