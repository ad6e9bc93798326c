use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use glob::Pattern;
use tracing::{debug, warn};

use crate::input::layout::platform_root;
use crate::model::platform::{Panel, Platform};
use crate::pipeline::PipelineError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunLocation {
    pub run_id: String,
    pub project_dir: PathBuf,
}

pub fn run_search_pattern(
    ngs_root: &Path,
    platform: Platform,
    date_prefix: &str,
    panel: Panel,
) -> String {
    let root = Pattern::escape(&platform_root(ngs_root, platform).to_string_lossy());
    let project = panel.project_path(platform);
    format!(
        "{}/{}*/{}",
        root,
        Pattern::escape(date_prefix),
        project.to_string_lossy()
    )
}

pub fn locate_runs(
    ngs_root: &Path,
    platform: Platform,
    date_prefix: &str,
    panel: Panel,
) -> Result<Vec<RunLocation>, PipelineError> {
    let pattern = run_search_pattern(ngs_root, platform, date_prefix, panel);
    debug!("searching runs with pattern {}", pattern);

    let paths = glob::glob(&pattern).map_err(|source| PipelineError::Pattern {
        pattern: pattern.clone(),
        source,
    })?;

    let mut runs: BTreeMap<String, PathBuf> = BTreeMap::new();
    for entry in paths {
        let project_dir = match entry {
            Ok(path) => path,
            Err(err) => {
                warn!("skipping unreadable path while searching runs: {}", err);
                continue;
            }
        };
        if !project_dir.is_dir() {
            continue;
        }
        let Some(run_id) = run_id_of(&project_dir) else {
            continue;
        };
        runs.entry(run_id).or_insert(project_dir);
    }

    if runs.is_empty() {
        return Err(PipelineError::NoRuns {
            platform,
            date_prefix: date_prefix.to_string(),
            panel,
            root: ngs_root.to_path_buf(),
        });
    }

    Ok(runs
        .into_iter()
        .map(|(run_id, project_dir)| RunLocation {
            run_id,
            project_dir,
        })
        .collect())
}

fn run_id_of(project_dir: &Path) -> Option<String> {
    let run_dir = project_dir.parent()?.parent()?;
    Some(run_dir.file_name()?.to_string_lossy().into_owned())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_locate.rs"]
mod tests;
