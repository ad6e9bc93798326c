use tracing::debug;

use crate::input::InputError;
use crate::input::calls::count_cnv_calls;
use crate::input::layout::SampleDir;
use crate::input::metrics::read_cnv_metrics;
use crate::input::qc::read_qc_status;
use crate::model::records::{CoverageRecord, SampleCnvQc};
use crate::pipeline::IssueLog;

#[derive(Debug, Clone)]
pub struct RunTables {
    pub run_id: String,
    pub cnv_qc: Vec<SampleCnvQc>,
    pub coverage: Vec<CoverageRecord>,
}

pub fn collect_cnv_qc(
    run_id: &str,
    samples: &[SampleDir],
    issues: &mut IssueLog,
) -> Vec<SampleCnvQc> {
    let mut rows = Vec::with_capacity(samples.len());
    for sample in samples {
        let accession = sample.accession.as_str();

        let qc_path = sample.qc_file();
        let cnv_qc = issues.collect(
            run_id,
            accession,
            InputError::require_file(&qc_path).and_then(|()| read_qc_status(&qc_path)),
        );

        let metrics_path = sample.metrics_file();
        let metrics = issues.collect(
            run_id,
            accession,
            InputError::require_file(&metrics_path)
                .and_then(|()| read_cnv_metrics(&metrics_path)),
        );

        // no BED file means the caller produced no call set, not zero calls
        let calls_path = sample.calls_file();
        let cnv_calls = if calls_path.is_file() {
            issues.collect(run_id, accession, count_cnv_calls(&calls_path))
        } else {
            debug!("{}: no CNV calls at {}", accession, calls_path.display());
            None
        };

        rows.push(SampleCnvQc::new(run_id, accession, cnv_qc, metrics, cnv_calls));
    }
    rows
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_cnv_qc.rs"]
mod tests;
