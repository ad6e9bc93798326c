use std::collections::BTreeMap;

use crate::model::records::{MergedRow, QcVerdict, RunStats, SummaryRow};
use crate::report::{mean, round2};

#[derive(Debug, Clone)]
pub struct StatsReport {
    pub all_samples: Vec<MergedRow>,
    pub clinical_samples: Vec<MergedRow>,
    pub run_stats_all: Vec<RunStats>,
    pub run_stats_clinical: Vec<RunStats>,
    pub summary: Vec<SummaryRow>,
}

pub fn build_stats(all_samples: Vec<MergedRow>) -> StatsReport {
    let clinical_samples: Vec<MergedRow> = all_samples
        .iter()
        .filter(|r| r.is_clinical())
        .cloned()
        .collect();
    let run_stats_all = run_stats(&all_samples);
    let run_stats_clinical = run_stats(&clinical_samples);
    let summary = summarize_passing(&clinical_samples);
    StatsReport {
        all_samples,
        clinical_samples,
        run_stats_all,
        run_stats_clinical,
        summary,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ColumnMeans {
    x10: f64,
    x20: f64,
    x50: f64,
    x100: f64,
    mean_coverage: f64,
    cnv_calls: f64,
    stdev: f64,
    mad: f64,
    iqr: f64,
    bivar: f64,
    mad_iqr_bivar_sum: f64,
}

fn column_means(rows: &[&MergedRow]) -> ColumnMeans {
    let col = |f: fn(&MergedRow) -> Option<f64>| mean(rows.iter().filter_map(|r| f(r))).unwrap_or(0.0);
    ColumnMeans {
        x10: col(|r| r.x10),
        x20: col(|r| r.x20),
        x50: col(|r| r.x50),
        x100: col(|r| r.x100),
        mean_coverage: col(|r| r.mean_coverage),
        cnv_calls: col(|r| r.cnv_calls.map(|c| c as f64)),
        stdev: col(|r| r.stdev),
        mad: col(|r| r.mad),
        iqr: col(|r| r.iqr),
        bivar: col(|r| r.bivar),
        mad_iqr_bivar_sum: col(|r| r.mad_iqr_bivar_sum),
    }
}

pub fn run_stats(rows: &[MergedRow]) -> Vec<RunStats> {
    let mut by_run: BTreeMap<&str, Vec<&MergedRow>> = BTreeMap::new();
    for row in rows {
        by_run.entry(row.run_id.as_str()).or_default().push(row);
    }

    let mut out = Vec::with_capacity(by_run.len());
    for (run_id, group) in by_run {
        let means = column_means(&group);
        let passing: Vec<&MergedRow> = group.iter().copied().filter(|r| r.cnv_qc_passed()).collect();
        let num_samples = group.len();
        let num_passing = passing.len();
        let avg_passing_calls = mean(
            passing
                .iter()
                .filter_map(|r| r.cnv_calls.map(|c| c as f64)),
        )
        .map(round2)
        .unwrap_or(0.0);

        out.push(RunStats {
            run_id: run_id.to_string(),
            x10: means.x10,
            x20: means.x20,
            x50: means.x50,
            x100: means.x100,
            mean_coverage: means.mean_coverage,
            avg_cnv_calls: means.cnv_calls,
            stdev: means.stdev,
            mad: means.mad,
            iqr: means.iqr,
            bivar: means.bivar,
            mad_iqr_bivar_sum: means.mad_iqr_bivar_sum,
            num_samples,
            num_samples_passing_cnv_qc: num_passing,
            avg_cnv_calls_in_passing_samples: avg_passing_calls,
            cnv_failure_rate: 1.0 - num_passing as f64 / num_samples as f64,
        });
    }
    out
}

pub fn summarize_passing(rows: &[MergedRow]) -> Vec<SummaryRow> {
    let passing: Vec<&MergedRow> = rows
        .iter()
        .filter(|r| r.qc_updated == Some(QcVerdict::Pass))
        .collect();
    if passing.is_empty() {
        return Vec::new();
    }
    let means = column_means(&passing);
    vec![SummaryRow {
        group: "Total".to_string(),
        x10: means.x10,
        x20: means.x20,
        x50: means.x50,
        x100: means.x100,
        mean_coverage: means.mean_coverage,
        cnv_calls: means.cnv_calls,
        stdev: means.stdev,
        mad: means.mad,
        iqr: means.iqr,
        bivar: means.bivar,
        mad_iqr_bivar_sum: means.mad_iqr_bivar_sum,
        num_samples_passing_exome_qc: passing.len(),
    }]
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_stats.rs"]
mod tests;
