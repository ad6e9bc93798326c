use super::*;
use crate::input::layout::list_sample_dirs;

fn write(dir: &std::path::Path, name: &str, contents: &str) {
    std::fs::write(dir.join(name), contents).unwrap();
}

#[test]
fn test_complete_and_partial_samples() {
    let project = tempfile::tempdir().unwrap();
    let full = project.path().join("Sample_A1");
    let partial = project.path().join("Sample_B2");
    std::fs::create_dir_all(&full).unwrap();
    std::fs::create_dir_all(&partial).unwrap();

    write(&full, "A1.cnv.qc", "#QC PASS\n");
    write(&full, "A1.metrics", "sample\tsex\tstdev\tmad\tiqr\tbivar\nA1\tM\t0.1\t0.2\t0.3\t0.4\n");
    write(&full, "A1.cnv.bed", "#Chromosome\tstart\tend\nchr1\t1\t2\nchr2\t3\t4\n");
    write(&partial, "B2.cnv.qc", "#QC FAIL\n");

    let samples = list_sample_dirs(project.path()).unwrap();
    let mut issues = IssueLog::default();
    let rows = collect_cnv_qc("RUN1", &samples, &mut issues);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].sample, "A1");
    assert_eq!(rows[0].cnv_qc.as_deref(), Some("PASS"));
    assert_eq!(rows[0].mad, Some(0.2));
    assert_eq!(rows[0].cnv_calls, Some(2));

    assert_eq!(rows[1].run_id, "RUN1");
    assert_eq!(rows[1].cnv_qc.as_deref(), Some("FAIL"));
    assert_eq!(rows[1].metrics(), None);
    assert_eq!(rows[1].cnv_calls, None);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues.issues()[0].sample.as_deref(), Some("B2"));
    assert!(issues.issues()[0].path.ends_with("B2.metrics"));
    assert!(issues.issues()[0].message.starts_with("missing file"));
}

#[test]
fn test_malformed_metrics_recorded_as_issue() {
    let project = tempfile::tempdir().unwrap();
    let dir = project.path().join("Sample_A1");
    std::fs::create_dir_all(&dir).unwrap();
    write(&dir, "A1.metrics", "A1\tM\tnot-a-number\n");
    write(&dir, "A1.cnv.qc", "no tag here\n");

    let samples = list_sample_dirs(project.path()).unwrap();
    let mut issues = IssueLog::default();
    let rows = collect_cnv_qc("RUN1", &samples, &mut issues);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].stdev, None);
    assert_eq!(rows[0].cnv_qc, None);
    assert_eq!(issues.len(), 2);
    assert!(issues.issues().iter().all(|i| i.sample.as_deref() == Some("A1")));
    assert!(issues.issues()[0].path.ends_with("A1.cnv.qc"));
}

#[test]
fn test_missing_bed_is_not_an_issue() {
    let project = tempfile::tempdir().unwrap();
    let dir = project.path().join("Sample_A1");
    std::fs::create_dir_all(&dir).unwrap();
    write(&dir, "A1.cnv.qc", "#QC PASS\n");
    write(&dir, "A1.metrics", "A1\tF\t0.1\t0.2\t0.3\t0.4\n");

    let samples = list_sample_dirs(project.path()).unwrap();
    let mut issues = IssueLog::default();
    let rows = collect_cnv_qc("RUN1", &samples, &mut issues);

    assert_eq!(rows[0].cnv_calls, None);
    assert!(issues.is_empty());
}
