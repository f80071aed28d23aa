//! Integration tests for the full pipeline on the shipped student dataset
//!
//! These tests exercise loading, comment handling, missing-value recovery,
//! and group aggregation end-to-end against `data/eg6-a-student-data.txt`.

use cohort_stats::app::services::aggregation::summarize_file;
use cohort_stats::app::services::table_loader::{converters, TableLoader, TableSpec};
use cohort_stats::constants::{DEFAULT_HEADER_ROWS, GENDER_COLUMN, HEIGHT_COLUMN};
use cohort_stats::Error;
use std::io::Write;
use std::path::PathBuf;

/// Path to the sample dataset shipped with the crate
fn sample_data_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("data")
        .join("eg6-a-student-data.txt")
}

#[test]
fn test_sample_dataset_loads_nineteen_records() {
    let spec = TableSpec::new(GENDER_COLUMN, HEIGHT_COLUMN).with_skip_rows(DEFAULT_HEADER_ROWS);
    let result = TableLoader::new(spec).load(&sample_data_path()).unwrap();

    // 20 students, one row commented out within the data region
    assert_eq!(result.records.len(), 19);
    assert_eq!(result.stats.header_skipped, DEFAULT_HEADER_ROWS);
    assert_eq!(result.stats.comments_skipped, 1);

    let males = result.records.iter().filter(|r| r.gender == 'M').count();
    let females = result.records.iter().filter(|r| r.gender == 'F').count();
    assert_eq!(males, 10);
    assert_eq!(females, 9);
}

#[test]
fn test_sample_dataset_group_averages() {
    let result = summarize_file(&sample_data_path(), DEFAULT_HEADER_ROWS).unwrap();
    let summary = &result.summary;

    // Heights are always populated: plain group means
    assert!((summary.male_height_avg - 1.748).abs() < 1e-9);
    assert!((summary.female_height_avg - 14.84 / 9.0).abs() < 1e-9);

    // Weight means run over observed values only: one male and two female
    // rows hold the missing marker
    assert!((summary.male_weight_avg - 742.0 / 9.0).abs() < 1e-9);
    assert!((summary.female_weight_avg - 468.6 / 7.0).abs() < 1e-9);
}

#[test]
fn test_sample_dataset_report_formatting() {
    let result = summarize_file(&sample_data_path(), DEFAULT_HEADER_ROWS).unwrap();
    let summary = &result.summary;

    assert_eq!(format!("{:.2}", summary.male_height_avg), "1.75");
    assert_eq!(format!("{:.2}", summary.female_height_avg), "1.65");
    assert_eq!(format!("{:.2}", summary.male_weight_avg), "82.44");
    assert_eq!(format!("{:.2}", summary.female_weight_avg), "66.94");
}

#[test]
fn test_sample_dataset_missing_weight_accounting() {
    let result = summarize_file(&sample_data_path(), DEFAULT_HEADER_ROWS).unwrap();

    assert_eq!(result.height_stats.records_loaded, 19);
    assert_eq!(result.weight_stats.records_loaded, 19);
    assert!(result.height_stats.is_complete());
    assert_eq!(result.weight_stats.missing_values, 3);
}

#[test]
fn test_sample_dataset_vo2max_column_needs_lenient_converter() {
    // Column 6 mixes decimals and missing markers, so the strict default
    // must reject it and the lenient converter must load it
    let strict = TableSpec::new(GENDER_COLUMN, 6).with_skip_rows(DEFAULT_HEADER_ROWS);
    assert!(matches!(
        TableLoader::new(strict).load(&sample_data_path()),
        Err(Error::MalformedRow { .. })
    ));

    let lenient = TableSpec::new(GENDER_COLUMN, 6)
        .with_skip_rows(DEFAULT_HEADER_ROWS)
        .with_converter(6, converters::decimal_or_missing);
    let result = TableLoader::new(lenient).load(&sample_data_path()).unwrap();

    assert_eq!(result.records.len(), 19);
    assert_eq!(result.stats.missing_values, 3);
}

#[test]
fn test_all_missing_group_column_triggers_empty_group_policy() {
    // Every female weight holds the marker: the female weight mean must
    // fail with the documented empty-group error, not produce a number
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "header\n\
         AB-1 M 1/1/96 1.80 80.0\n\
         AB-2 F 2/2/96 1.60 -\n\
         AB-3 M 3/3/96 1.70 70.0\n\
         AB-4 F 4/4/96 1.64 -\n"
    )
    .unwrap();
    file.flush().unwrap();

    let result = summarize_file(file.path(), 1);

    match result {
        Err(Error::EmptyGroup { group }) => assert_eq!(group, "female weight"),
        other => panic!("expected EmptyGroup, got {:?}", other),
    }
}
