use super::*;
use crate::fixtures::{cnv_row, merged_row};
use crate::model::records::QcVerdict;

fn serde_header<T: Serialize>(row: &T) -> String {
    let mut w = csv::Writer::from_writer(Vec::new());
    w.serialize(row).unwrap();
    let bytes = w.into_inner().unwrap();
    String::from_utf8(bytes).unwrap().lines().next().unwrap().to_string()
}

fn read_back<T: serde::de::DeserializeOwned>(path: &Path) -> Vec<T> {
    let mut r = csv::Reader::from_path(path).unwrap();
    r.deserialize().map(|row| row.unwrap()).collect()
}

#[test]
fn test_columns_match_serialized_fields() {
    let merged = merged_row("RUN1", "S1", 99.0, 100.0, QcVerdict::Pass, "PASS", 4, 0.1);
    assert_eq!(serde_header(&merged), MergedRow::COLUMNS.join(","));

    let cnv = cnv_row("RUN1", "S1", "PASS", Some(1));
    assert_eq!(serde_header(&cnv), SampleCnvQc::COLUMNS.join(","));

    let stats = crate::pipeline::stage5_stats::run_stats(&[merged.clone()]);
    assert_eq!(serde_header(&stats[0]), RunStats::COLUMNS.join(","));

    let summary = crate::pipeline::stage5_stats::summarize_passing(&[merged]);
    assert_eq!(serde_header(&summary[0]), SummaryRow::COLUMNS.join(","));
}

#[test]
fn test_merged_table_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("merged.csv");

    let mut partial = merged_row("RUN2", "S2", 0.1 + 0.2, 1e-7, QcVerdict::Fail, "FAIL", 0, 1.0 / 3.0);
    partial.cnv_calls = None;
    partial.qc_old = None;
    let rows = vec![
        merged_row("RUN1", "S1", 99.25, 123.456789, QcVerdict::Pass, "PASS", 4, 0.1),
        partial,
    ];
    write_table(&path, &rows).unwrap();

    let back: Vec<MergedRow> = read_back(&path);
    assert_eq!(back, rows);
}

#[test]
fn test_empty_table_keeps_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.csv");
    write_table::<SummaryRow>(&path, &[]).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text.trim_end(), SummaryRow::COLUMNS.join(","));
}

#[test]
fn test_write_replaces_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cov.csv");
    std::fs::write(&path, "stale contents that are longer than the new table\n").unwrap();
    write_records(&path, &["sample", "X10"], vec![vec!["A1".to_string(), "99".to_string()]])
        .unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "sample,X10\nA1,99\n");
}

#[test]
fn test_unwritable_path_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing_dir").join("t.csv");
    let err = write_table::<SummaryRow>(&path, &[]).unwrap_err();
    assert!(err.to_string().contains("t.csv"));
}
