use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::input::InputError;
use crate::input::layout::list_sample_dirs;
use crate::model::platform::{Panel, Platform};
use crate::model::thresholds::QcThresholds;
use crate::report::ReportError;

pub mod stage1_locate;
pub mod stage2_cnv_qc;
pub mod stage3_coverage;
pub mod stage4_merge;
pub mod stage5_stats;
pub mod stage6_report;

use stage1_locate::locate_runs;
use stage2_cnv_qc::{RunTables, collect_cnv_qc};
use stage3_coverage::collect_coverage;
use stage4_merge::merge_tables;
use stage5_stats::build_stats;
use stage6_report::{PlotPair, write_reports};

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub platform: Platform,
    pub date_prefix: String,
    pub panel: Panel,
    pub ngs_root: PathBuf,
    pub out_dir: PathBuf,
    pub thresholds: QcThresholds,
    pub plots: Vec<PlotPair>,
}

impl RunConfig {
    pub fn tag(&self) -> String {
        format!("{}_{}_{}", self.platform, self.date_prefix, self.panel)
    }
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(
        "no runs found for platform={platform} date={date_prefix} panel={panel} under {}",
        root.display()
    )]
    NoRuns {
        platform: Platform,
        date_prefix: String,
        panel: Panel,
        root: PathBuf,
    },
    #[error("invalid run search pattern {pattern}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
    #[error("unable to create output directory {}: {source}", path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Report(#[from] ReportError),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Issue {
    pub run_id: String,
    pub sample: Option<String>,
    pub path: PathBuf,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct IssueLog {
    issues: Vec<Issue>,
}

impl IssueLog {
    pub fn record(&mut self, run_id: &str, sample: Option<&str>, err: &InputError) {
        match sample {
            Some(s) => warn!("run {} sample {}: {}", run_id, s, err),
            None => warn!("run {}: {}", run_id, err),
        }
        self.issues.push(Issue {
            run_id: run_id.to_string(),
            sample: sample.map(str::to_string),
            path: err.path().to_path_buf(),
            message: err.to_string(),
        });
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn collect<T>(
        &mut self,
        run_id: &str,
        sample: &str,
        result: Result<T, InputError>,
    ) -> Option<T> {
        result.map_err(|err| self.record(run_id, Some(sample), &err)).ok()
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn log_summary(&self) {
        if self.issues.is_empty() {
            return;
        }
        let mut runs: Vec<&str> = self.issues.iter().map(|i| i.run_id.as_str()).collect();
        runs.sort_unstable();
        runs.dedup();
        warn!(
            "{} extraction issues across {} runs ({}); affected fields are left empty",
            self.issues.len(),
            runs.len(),
            runs.join(", ")
        );
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineSummary {
    pub n_runs: usize,
    pub n_samples: usize,
    pub n_issues: usize,
}

pub fn run_pipeline(config: &RunConfig) -> Result<PipelineSummary, PipelineError> {
    let runs = locate_runs(
        &config.ngs_root,
        config.platform,
        &config.date_prefix,
        config.panel,
    )?;
    info!(
        "found {} runs for {}: {}",
        runs.len(),
        config.tag(),
        runs.iter()
            .map(|r| r.run_id.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );

    std::fs::create_dir_all(&config.out_dir).map_err(|source| PipelineError::OutputDir {
        path: config.out_dir.clone(),
        source,
    })?;

    let mut issues = IssueLog::default();
    let mut tables = Vec::with_capacity(runs.len());
    for run in &runs {
        let samples = match list_sample_dirs(&run.project_dir) {
            Ok(samples) => samples,
            Err(err) => {
                issues.record(&run.run_id, None, &err);
                continue;
            }
        };
        if samples.is_empty() {
            warn!(
                "run {} has no sample directories under {}",
                run.run_id,
                run.project_dir.display()
            );
        }
        let cnv_qc = collect_cnv_qc(&run.run_id, &samples, &mut issues);
        let coverage = collect_coverage(
            &run.run_id,
            &samples,
            config.panel,
            &config.thresholds.coverage,
            &mut issues,
        );
        tables.push(RunTables {
            run_id: run.run_id.clone(),
            cnv_qc,
            coverage,
        });
    }

    let merged = merge_tables(&tables, &config.thresholds);
    let stats = build_stats(merged);
    issues.log_summary();
    write_reports(config, &tables, &stats, &issues)?;

    let summary = PipelineSummary {
        n_runs: runs.len(),
        n_samples: stats.all_samples.len(),
        n_issues: issues.len(),
    };
    info!(
        "compiled {} samples from {} runs into {}",
        summary.n_samples,
        summary.n_runs,
        config.out_dir.display()
    );
    Ok(summary)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/mod.rs"]
mod tests;
