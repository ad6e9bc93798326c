use super::*;
use crate::fixtures::merged_row;

fn rows() -> Vec<MergedRow> {
    vec![
        merged_row("RUN2", "S1", 99.0, 100.0, QcVerdict::Pass, "PASS", 4, 0.1),
        merged_row("RUN1", "S2", 98.0, 80.0, QcVerdict::Pass, "PASS", 2, 0.2),
        merged_row("RUN1", "S3", 97.0, 60.0, QcVerdict::Fail, "FAIL", 9, 0.3),
        merged_row("RUN1", "RD_S4", 96.0, 40.0, QcVerdict::Pass, "PASS", 3, 0.4),
    ]
}

#[test]
fn test_run_stats_grouped_and_sorted() {
    let stats = run_stats(&rows());
    assert_eq!(stats.len(), 2);
    assert_eq!(stats[0].run_id, "RUN1");
    assert_eq!(stats[1].run_id, "RUN2");

    let run1 = &stats[0];
    assert_eq!(run1.num_samples, 3);
    assert_eq!(run1.num_samples_passing_cnv_qc, 2);
    assert_eq!(run1.x10, 97.0);
    assert_eq!(run1.mean_coverage, 60.0);
    assert!((run1.avg_cnv_calls - 14.0 / 3.0).abs() < 1e-12);
    assert_eq!(run1.avg_cnv_calls_in_passing_samples, 2.5);
    assert!((run1.cnv_failure_rate - 1.0 / 3.0).abs() < 1e-12);
}

#[test]
fn test_passing_call_average_is_rounded() {
    let mut rows = rows();
    rows[1].cnv_calls = Some(1);
    rows[3].cnv_calls = Some(2);
    rows.push(merged_row("RUN1", "S5", 99.0, 90.0, QcVerdict::Pass, "PASS", 2, 0.1));
    let stats = run_stats(&rows);
    assert_eq!(stats[0].avg_cnv_calls_in_passing_samples, 1.67);
}

#[test]
fn test_run_without_passing_samples() {
    let rows = vec![merged_row("RUN1", "S1", 99.0, 100.0, QcVerdict::Pass, "FAIL", 4, 0.1)];
    let stats = run_stats(&rows);
    assert_eq!(stats[0].num_samples_passing_cnv_qc, 0);
    assert_eq!(stats[0].avg_cnv_calls_in_passing_samples, 0.0);
    assert_eq!(stats[0].cnv_failure_rate, 1.0);
}

#[test]
fn test_missing_values_average_to_zero() {
    let mut row = merged_row("RUN1", "S1", 99.0, 100.0, QcVerdict::Pass, "PASS", 4, 0.1);
    row.x100 = None;
    let stats = run_stats(&[row]);
    assert_eq!(stats[0].x100, 0.0);
}

#[test]
fn test_build_stats_excludes_research_samples() {
    let report = build_stats(rows());
    assert_eq!(report.all_samples.len(), 4);
    assert_eq!(report.clinical_samples.len(), 3);
    assert!(report.clinical_samples.iter().all(|r| !r.sample.contains("RD")));
    assert_eq!(report.run_stats_clinical[0].num_samples, 2);

    assert_eq!(report.summary.len(), 1);
    let total = &report.summary[0];
    assert_eq!(total.group, "Total");
    assert_eq!(total.num_samples_passing_exome_qc, 2);
    assert_eq!(total.mean_coverage, 90.0);
}

#[test]
fn test_summary_empty_when_nothing_passes() {
    let rows = vec![merged_row("RUN1", "S1", 90.0, 10.0, QcVerdict::Fail, "PASS", 1, 0.1)];
    assert!(summarize_passing(&rows).is_empty());
}
