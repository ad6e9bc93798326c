use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::{debug, info, warn};

use crate::model::records::RunStats;
use crate::pipeline::stage2_cnv_qc::RunTables;
use crate::pipeline::stage3_coverage::{coverage_cell, coverage_columns};
use crate::pipeline::stage5_stats::StatsReport;
use crate::pipeline::{Issue, IssueLog, RunConfig};
use crate::report::ReportError;
use crate::report::plot::write_regression_plot;
use crate::report::table::{TableRow, write_records, write_table};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotPair {
    pub x: String,
    pub y: String,
}

impl PlotPair {
    pub fn defaults() -> Vec<PlotPair> {
        vec![
            PlotPair {
                x: "CNV_failure_rate".to_string(),
                y: "MadIQRBivarSum".to_string(),
            },
            PlotPair {
                x: "avg_cnv_calls_in_passing_samples".to_string(),
                y: "MadIQRBivarSum".to_string(),
            },
        ]
    }

    pub fn file_name(&self) -> String {
        format!("{}VS{}.svg", self.x, self.y)
    }
}

impl FromStr for PlotPair {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((x, y)) = s.split_once(',') else {
            return Err(format!("expected X,Y but got '{s}'"));
        };
        let (x, y) = (x.trim(), y.trim());
        for name in [x, y] {
            if !RunStats::NUMERIC_COLUMNS.contains(&name) {
                return Err(format!(
                    "unknown run statistic '{}' (use one of: {})",
                    name,
                    RunStats::NUMERIC_COLUMNS.join(", ")
                ));
            }
        }
        Ok(PlotPair {
            x: x.to_string(),
            y: y.to_string(),
        })
    }
}

impl TableRow for Issue {
    const COLUMNS: &'static [&'static str] = &["run_id", "sample", "path", "message"];
}

pub const SHEETS: [&str; 5] = [
    "all_samples",
    "clinical_samples",
    "run_stats_all",
    "run_stats_clinical",
    "summary",
];

pub fn sheet_path(out_dir: &Path, tag: &str, sheet: &str) -> PathBuf {
    out_dir.join(format!("{tag}_stats_{sheet}.csv"))
}

pub fn write_reports(
    config: &RunConfig,
    tables: &[RunTables],
    stats: &StatsReport,
    issues: &IssueLog,
) -> Result<(), ReportError> {
    let out_dir = config.out_dir.as_path();

    for table in tables {
        let cnv_path = out_dir.join(format!("{}_sample_cnv_qc_summary.csv", table.run_id));
        write_table(&cnv_path, &table.cnv_qc)?;

        let columns = coverage_columns(&table.coverage);
        let cov_path = out_dir.join(format!("{}_cov_stats.csv", table.run_id));
        write_records(
            &cov_path,
            &columns,
            table
                .coverage
                .iter()
                .map(|r| columns.iter().map(|c| coverage_cell(r, c)).collect()),
        )?;
        debug!(
            "wrote {} and {}",
            cnv_path.display(),
            cov_path.display()
        );
    }

    let tag = config.tag();
    let [all, clinical, runs_all, runs_clinical, summary] =
        SHEETS.map(|sheet| sheet_path(out_dir, &tag, sheet));
    write_table(&all, &stats.all_samples)?;
    write_table(&clinical, &stats.clinical_samples)?;
    write_table(&runs_all, &stats.run_stats_all)?;
    write_table(&runs_clinical, &stats.run_stats_clinical)?;
    write_table(&summary, &stats.summary)?;
    info!("wrote stats sheets {}_stats_*.csv", tag);

    let issues_path = out_dir.join(format!("{tag}_issues.csv"));
    write_table(&issues_path, issues.issues())?;
    if !issues.is_empty() {
        info!(
            "wrote {} extraction issues to {}",
            issues.len(),
            issues_path.display()
        );
    }

    for pair in &config.plots {
        let points: Vec<(f64, f64)> = stats
            .run_stats_clinical
            .iter()
            .filter_map(|r| Some((r.metric(&pair.x)?, r.metric(&pair.y)?)))
            .collect();
        let path = out_dir.join(pair.file_name());
        match write_regression_plot(&path, &points, &pair.x, &pair.y) {
            Ok(()) => info!("wrote plot {}", path.display()),
            Err(err) => warn!("{}", err),
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage6_report.rs"]
mod tests;
