//! Tests for the fetch-and-parse pipeline

use std::io::Write;

use tempfile::NamedTempFile;

use super::*;
use crate::app::services::sheet_source::{
    CsvFileSource, DiveLogService, FetchOutcome, SheetSource, TabularSource,
};
use crate::config::LogbookConfig;

#[tokio::test]
async fn test_scenario_export_is_newest_first() {
    let service = DiveLogService::new(StaticSource::ok(SCENARIO_EXPORT));

    let outcome = service.fetch().await;
    let FetchOutcome::Loaded { entries, stats } = outcome else {
        panic!("Expected a loaded outcome");
    };

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].date, "2024-05-02");
    assert_eq!(entries[0].dive_site, "Wreck Point");
    assert_eq!(entries[1].date, "2024-05-01");
    assert_eq!(entries[1].dive_site, "Blue Hole");
    assert_eq!(stats.records_parsed, 2);
}

#[tokio::test]
async fn test_failure_degrades_to_empty() {
    let service = DiveLogService::new(StaticSource::failing());

    let outcome = service.fetch().await;
    assert!(outcome.is_failed());
    assert!(outcome.entries().is_empty());

    let FetchOutcome::Failed { reason } = outcome else {
        panic!("Expected a failed outcome");
    };
    assert!(reason.contains("503"));

    assert!(service.fetch_dive_data().await.is_empty());
}

#[tokio::test]
async fn test_header_only_export_is_loaded_not_failed() {
    let service = DiveLogService::new(StaticSource::ok("Timestamp,Date,Site\n"));

    let outcome = service.fetch().await;
    assert!(!outcome.is_failed());
    assert!(outcome.entries().is_empty());
}

#[tokio::test]
async fn test_repeated_fetches_are_equal() {
    let source = StaticSource::ok(SCENARIO_EXPORT);
    let service = DiveLogService::new(source.clone());

    let first = service.fetch_dive_data().await;
    let second = service.fetch_dive_data().await;

    assert_eq!(first, second);
    assert_eq!(source.calls(), 2);
}

#[tokio::test]
async fn test_csv_file_source() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", SCENARIO_EXPORT).unwrap();

    let source = CsvFileSource::new(file.path());
    assert!(source.describe().contains("local export"));

    let entries = DiveLogService::new(source).fetch_dive_data().await;
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].dive_site, "Wreck Point");
}

#[tokio::test]
async fn test_missing_csv_file_fails_quietly() {
    let temp_dir = tempfile::tempdir().unwrap();
    let missing = temp_dir.path().join("responses.csv");

    let outcome = DiveLogService::new(CsvFileSource::new(missing)).fetch().await;
    assert!(outcome.is_failed());
}

#[test]
fn test_source_selection_from_config() {
    let file_config = LogbookConfig::default().with_csv_file("responses.csv");
    assert!(matches!(
        SheetSource::from_config(&file_config).unwrap(),
        SheetSource::File(_)
    ));

    let sheet_config = LogbookConfig::default();
    let source = SheetSource::from_config(&sheet_config).unwrap();
    assert!(matches!(source, SheetSource::Google(_)));
    assert!(source.describe().contains("docs.google.com"));
}
