mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::error;

use crate::model::platform::{Panel, Platform};
use crate::model::thresholds::QcThresholds;
use crate::pipeline::stage6_report::PlotPair;
use crate::pipeline::{PipelineError, RunConfig, run_pipeline};

/// Compile CNV QC metrics and coverage statistics for the runs matching a
/// platform, a date prefix and a panel.
#[derive(Debug, Parser)]
#[command(name = "auto-cnvqc", version, about)]
struct Cli {
    /// Sequencing platform.
    #[arg(long, value_enum)]
    platform: Platform,

    /// Run date prefix, e.g. 2205 for May 2022.
    #[arg(long, value_parser = parse_date_prefix)]
    date: String,

    /// Test panel.
    #[arg(long, value_enum)]
    panel: Panel,

    /// Base output directory; results go to `<outdir>/<platform>_<date>_<panel>`.
    #[arg(long)]
    outdir: Option<PathBuf>,

    /// Root of the NGS tree.
    #[arg(long, env = "CNVQC_NGS_ROOT", default_value = "/NGS")]
    ngs_root: PathBuf,

    /// Run statistics to plot as X,Y. Repeatable; replaces the default pairs.
    #[arg(long = "regplot", value_name = "X,Y", value_parser = parse_plot_pair)]
    regplot: Vec<PlotPair>,

    /// Skip regression plots.
    #[arg(long)]
    no_plots: bool,

    /// Debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    if let Err(err) = run(cli) {
        error!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), PipelineError> {
    let config = build_config(cli)?;
    run_pipeline(&config)?;
    Ok(())
}

fn build_config(cli: Cli) -> Result<RunConfig, PipelineError> {
    let base = match cli.outdir {
        Some(dir) => dir,
        None => std::env::current_dir().map_err(|source| PipelineError::OutputDir {
            path: PathBuf::from("."),
            source,
        })?,
    };
    let out_dir = resolve_output_dir(&base, cli.platform, &cli.date, cli.panel);
    let plots = if cli.no_plots {
        Vec::new()
    } else if cli.regplot.is_empty() {
        PlotPair::defaults()
    } else {
        cli.regplot
    };
    Ok(RunConfig {
        platform: cli.platform,
        date_prefix: cli.date,
        panel: cli.panel,
        ngs_root: cli.ngs_root,
        out_dir,
        thresholds: QcThresholds::default_v1(),
        plots,
    })
}

fn resolve_output_dir(base: &Path, platform: Platform, date: &str, panel: Panel) -> PathBuf {
    base.join(format!("{platform}_{date}_{panel}"))
}

fn parse_date_prefix(s: &str) -> Result<String, String> {
    if s.is_empty() {
        return Err("date prefix must not be empty".to_string());
    }
    if let Some(c) = s
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
    {
        return Err(format!(
            "invalid character '{c}' in date prefix (use letters, digits, '-' or '_')"
        ));
    }
    Ok(s.to_string())
}

fn parse_plot_pair(s: &str) -> Result<PlotPair, String> {
    s.parse()
}

#[cfg(test)]
#[path = "../tests/src_inline/fixtures.rs"]
mod fixtures;

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
