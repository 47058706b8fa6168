//! Tests for export-level parsing

use super::*;
use crate::app::services::sheet_parser::parse_sheet;

#[test]
fn test_minimal_export_is_reversed() {
    let result = parse_sheet("Timestamp,Date,Site\n1,2024-05-01,Blue Hole\n2,2024-05-02,Wreck Point\n");

    assert_eq!(result.entries.len(), 2);
    assert_eq!(result.entries[0].date, "2024-05-02");
    assert_eq!(result.entries[0].dive_site, "Wreck Point");
    assert_eq!(result.entries[1].date, "2024-05-01");
    assert_eq!(result.entries[1].dive_site, "Blue Hole");
    assert!(result.entries.iter().all(|entry| entry.total_time.is_empty()));
}

#[test]
fn test_header_is_always_discarded() {
    // A header that looks like data is still dropped
    let result = parse_sheet("0,2023-12-31,Header Reef\n1,2024-05-01,Catalinas");
    assert_eq!(result.entries.len(), 1);
    assert_eq!(result.entries[0].dive_site, "Catalinas");
}

#[test]
fn test_header_only_export() {
    let result = parse_sheet(FORM_HEADER);
    assert!(result.entries.is_empty());
    assert_eq!(result.stats.lines_read, 0);

    let empty = parse_sheet("");
    assert!(empty.entries.is_empty());
}

#[test]
fn test_form_export_order_and_count() {
    let result = parse_sheet(&create_test_export());

    let sites: Vec<&str> = result
        .entries
        .iter()
        .map(|entry| entry.dive_site.as_str())
        .collect();
    assert_eq!(
        sites,
        vec!["Punta Gorda", "Tortuga", "Big Scare", "Bat Islands", "Catalinas"]
    );
    assert_eq!(result.stats.records_parsed, 5);
    assert_eq!(result.stats.short_rows, 0);
}

#[test]
fn test_blank_and_untokenizable_lines_are_skipped() {
    let export = format!(
        "{}\n\n{}\n   \n,,,\n{}\r\n",
        FORM_HEADER,
        quoted_row("1", "2024-05-01", "Catalinas"),
        quoted_row("2", "2024-05-02", "Big Scare")
    );
    let result = parse_sheet(&export);

    assert_eq!(result.entries.len(), 2);
    assert_eq!(result.entries[0].dive_site, "Big Scare");
    assert_eq!(result.entries[0].type_of_air, "Air");
    assert_eq!(result.stats.blank_lines, 3);
    assert_eq!(result.stats.untokenizable_lines, 1);
    assert_eq!(result.stats.lines_skipped(), 4);
}

#[test]
fn test_parsing_is_deterministic() {
    let export = create_test_export();
    assert_eq!(parse_sheet(&export), parse_sheet(&export));
}
