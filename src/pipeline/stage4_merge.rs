use std::collections::HashMap;

use tracing::warn;

use crate::model::records::{CoverageStats, MergedRow, SampleCnvQc};
use crate::model::thresholds::QcThresholds;
use crate::pipeline::stage2_cnv_qc::RunTables;

pub fn merge_tables(tables: &[RunTables], thresholds: &QcThresholds) -> Vec<MergedRow> {
    let mut rows: Vec<MergedRow> = Vec::new();
    let mut index: HashMap<(String, String), usize> = HashMap::new();
    let mut has_coverage: Vec<bool> = Vec::new();

    for table in tables {
        for cnv in &table.cnv_qc {
            let key = (cnv.run_id.clone(), cnv.sample.clone());
            if index.contains_key(&key) {
                warn!(
                    "duplicate CNV QC entry for run {} sample {}; keeping the first",
                    key.0, key.1
                );
                continue;
            }
            index.insert(key, rows.len());
            rows.push(row_from_cnv(cnv));
            has_coverage.push(false);
        }

        for record in &table.coverage {
            let stats = &record.stats;
            let key = (stats.run_id.clone(), stats.join_sample().to_string());
            let idx = match index.get(&key) {
                Some(&idx) => idx,
                None => {
                    index.insert(key.clone(), rows.len());
                    rows.push(empty_row(&key.0, &key.1));
                    has_coverage.push(false);
                    rows.len() - 1
                }
            };
            if has_coverage[idx] {
                warn!(
                    "duplicate coverage entry for run {} sample {}; keeping the first",
                    key.0, key.1
                );
                continue;
            }
            fill_coverage(&mut rows[idx], stats, thresholds);
            has_coverage[idx] = true;
        }
    }

    rows
}

fn empty_row(run_id: &str, sample: &str) -> MergedRow {
    MergedRow {
        run_id: run_id.to_string(),
        sample: sample.to_string(),
        x10: None,
        x20: None,
        x50: None,
        x100: None,
        mean_coverage: None,
        qc_old: None,
        qc_updated: None,
        cnv_qc: None,
        cnv_calls: None,
        stdev: None,
        mad: None,
        iqr: None,
        bivar: None,
        mad_iqr_bivar_sum: None,
    }
}

fn row_from_cnv(cnv: &SampleCnvQc) -> MergedRow {
    let mut row = empty_row(&cnv.run_id, &cnv.sample);
    row.cnv_qc = cnv.cnv_qc.clone();
    row.cnv_calls = cnv.cnv_calls;
    if let Some(m) = cnv.metrics() {
        row.stdev = Some(m.stdev);
        row.mad = Some(m.mad);
        row.iqr = Some(m.iqr);
        row.bivar = Some(m.bivar);
        row.mad_iqr_bivar_sum = Some(m.mad + m.iqr + m.bivar);
    }
    row
}

fn fill_coverage(row: &mut MergedRow, stats: &CoverageStats, thresholds: &QcThresholds) {
    row.x10 = Some(stats.x10);
    row.x20 = Some(stats.x20);
    row.x50 = Some(stats.x50);
    row.x100 = stats.x100;
    row.mean_coverage = Some(stats.mean_coverage);
    row.qc_old = Some(thresholds.legacy.evaluate(stats));
    row.qc_updated = Some(thresholds.coverage.evaluate(stats));
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_merge.rs"]
mod tests;
