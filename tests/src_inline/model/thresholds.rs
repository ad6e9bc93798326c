use super::*;
use crate::model::records::CoverageLayout;

fn stats_at_bounds() -> CoverageStats {
    CoverageStats {
        run_id: "220501_RUN".to_string(),
        sample: "ACC1".to_string(),
        layout: CoverageLayout::Standard,
        specificity: 80.0,
        mean_qs: 30.0,
        perfect_index: 99.0,
        q30: 75.0,
        x10: 98.0,
        x20: 97.0,
        x50: 90.0,
        x100: Some(60.0),
        x150: None,
        x500: None,
        x1000: None,
        yield_bases: None,
        pcr_dup_rate: Some(5.0),
        mean_coverage: 70.0,
    }
}

#[test]
fn test_coverage_pass_is_inclusive_at_every_bound() {
    let thresholds = QcThresholds::default_v1();
    let stats = stats_at_bounds();
    assert_eq!(thresholds.coverage.evaluate(&stats), QcVerdict::Pass);
}

#[test]
fn test_coverage_fails_just_below_each_bound() {
    let thresholds = QcThresholds::default_v1();
    let below: [fn(&mut CoverageStats); 5] = [
        |s| s.mean_qs = 29.99,
        |s| s.q30 = 74.99,
        |s| s.x10 = 97.99,
        |s| s.x20 = 96.99,
        |s| s.mean_coverage = 69.99,
    ];
    for lower in below {
        let mut stats = stats_at_bounds();
        lower(&mut stats);
        assert_eq!(thresholds.coverage.evaluate(&stats), QcVerdict::Fail);
    }
}

#[test]
fn test_legacy_criteria() {
    let thresholds = QcThresholds::default_v1();
    let mut stats = stats_at_bounds();
    assert_eq!(thresholds.legacy.evaluate(&stats), QcVerdict::Pass);

    stats.mean_coverage = 50.0;
    assert_eq!(thresholds.legacy.evaluate(&stats), QcVerdict::Pass);

    stats.mean_coverage = 49.9;
    assert_eq!(thresholds.legacy.evaluate(&stats), QcVerdict::Fail);

    let mut stats = stats_at_bounds();
    stats.x20 = 0.5;
    assert_eq!(thresholds.legacy.evaluate(&stats), QcVerdict::Fail);
}
