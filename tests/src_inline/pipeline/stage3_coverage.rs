use super::*;
use crate::input::layout::list_sample_dirs;
use crate::model::records::QcVerdict;
use crate::model::thresholds::QcThresholds;

const PASSING: &str = r#"{"sample": "A1", "specificity": 80, "mean_QS": 35, "perfect_index": 99,
    "q30": 90, "X10": 99.5, "X20": 98.5, "X50": 92, "X100": 60, "pcr_dup_rate": 4.2,
    "mean_coverage": 110}"#;

const DEEP_FAILING: &str = r#"{"sample": "B2.trim", "specificity": 70, "mean_QS": 35,
    "perfect_index": 99, "q30": 90, "X10": 99, "X20": 96, "X50": 95, "X150": 90,
    "X500": 50, "X1000": 10, "yield": 2000000, "mean_coverage": 600}"#;

#[test]
fn test_collect_coverage_evaluates_thresholds() {
    let project = tempfile::tempdir().unwrap();
    for (name, json) in [("A1", PASSING), ("B2", DEEP_FAILING)] {
        let dir = project.path().join(format!("Sample_{name}"));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(format!("{name}.trim.coverage.json")), json).unwrap();
    }
    std::fs::create_dir_all(project.path().join("Sample_C3")).unwrap();

    let samples = list_sample_dirs(project.path()).unwrap();
    let thresholds = QcThresholds::default_v1();
    let mut issues = IssueLog::default();
    let records = collect_coverage(
        "RUN1",
        &samples,
        Panel::Neuropathy,
        &thresholds.coverage,
        &mut issues,
    );

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].coverage_qc, QcVerdict::Pass);
    assert_eq!(records[1].coverage_qc, QcVerdict::Fail);
    assert_eq!(records[1].stats.join_sample(), "B2");
    assert_eq!(issues.len(), 1);
    assert!(issues.issues()[0].path.ends_with("Sample_C3/C3.trim.coverage.json"));

    let columns = coverage_columns(&records);
    assert_eq!(
        columns,
        vec![
            "sample",
            "specificity",
            "mean_QS",
            "perfect_index",
            "q30",
            "X10",
            "X20",
            "X50",
            "X150",
            "X500",
            "X1000",
            "yield",
            "X100",
            "pcr_dup_rate",
            "mean_coverage",
            "coverage_qc",
        ]
    );
    assert_eq!(coverage_cell(&records[0], "X1000"), "0");
    assert_eq!(coverage_cell(&records[1], "X1000"), "10");
    assert_eq!(coverage_cell(&records[1], "sample"), "B2.trim");
    assert_eq!(coverage_cell(&records[1], "coverage_qc"), "FAIL");
}

#[test]
fn test_bad_coverage_json_is_an_issue() {
    let project = tempfile::tempdir().unwrap();
    let dir = project.path().join("Sample_A1");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("A1.coverage.json"), "[1, 2]").unwrap();

    let samples = list_sample_dirs(project.path()).unwrap();
    let thresholds = QcThresholds::default_v1();
    let mut issues = IssueLog::default();
    let records = collect_coverage("RUN1", &samples, Panel::Exome, &thresholds.coverage, &mut issues);

    assert!(records.is_empty());
    assert_eq!(issues.len(), 1);
    assert_eq!(issues.issues()[0].run_id, "RUN1");
}
