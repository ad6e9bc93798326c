use crate::input::InputError;
use crate::input::coverage::read_coverage;
use crate::input::layout::SampleDir;
use crate::model::platform::Panel;
use crate::model::records::{CoverageLayout, CoverageRecord, CoverageStats};
use crate::model::thresholds::CoverageThresholds;
use crate::pipeline::IssueLog;

pub fn collect_coverage(
    run_id: &str,
    samples: &[SampleDir],
    panel: Panel,
    thresholds: &CoverageThresholds,
    issues: &mut IssueLog,
) -> Vec<CoverageRecord> {
    let mut records = Vec::with_capacity(samples.len());
    for sample in samples {
        let path = sample.coverage_file(panel);
        let stats = issues.collect(
            run_id,
            &sample.accession,
            InputError::require_file(&path)
                .and_then(|()| read_coverage(&path, run_id, &sample.accession)),
        );
        if let Some(stats) = stats {
            let coverage_qc = thresholds.evaluate(&stats);
            records.push(CoverageRecord { stats, coverage_qc });
        }
    }
    records
}

pub fn coverage_columns(records: &[CoverageRecord]) -> Vec<&'static str> {
    let has = |layout: CoverageLayout| records.iter().any(|r| r.stats.layout == layout);
    let mut columns = vec![
        "sample",
        "specificity",
        "mean_QS",
        "perfect_index",
        "q30",
        "X10",
        "X20",
        "X50",
    ];
    if has(CoverageLayout::HighDepth) {
        columns.extend(["X150", "X500", "X1000", "yield"]);
    }
    if has(CoverageLayout::Standard) || records.is_empty() {
        columns.extend(["X100", "pcr_dup_rate"]);
    }
    columns.push("mean_coverage");
    columns.push("coverage_qc");
    columns
}

pub fn coverage_cell(record: &CoverageRecord, column: &str) -> String {
    let s: &CoverageStats = &record.stats;
    let v = match column {
        "sample" => return s.sample.clone(),
        "coverage_qc" => return record.coverage_qc.to_string(),
        "specificity" => s.specificity,
        "mean_QS" => s.mean_qs,
        "perfect_index" => s.perfect_index,
        "q30" => s.q30,
        "X10" => s.x10,
        "X20" => s.x20,
        "X50" => s.x50,
        "X100" => s.x100.unwrap_or(0.0),
        "X150" => s.x150.unwrap_or(0.0),
        "X500" => s.x500.unwrap_or(0.0),
        "X1000" => s.x1000.unwrap_or(0.0),
        "yield" => s.yield_bases.unwrap_or(0.0),
        "pcr_dup_rate" => s.pcr_dup_rate.unwrap_or(0.0),
        "mean_coverage" => s.mean_coverage,
        _ => return String::new(),
    };
    v.to_string()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_coverage.rs"]
mod tests;
