use std::path::{Path, PathBuf};

use crate::input::InputError;
use crate::model::platform::{Panel, Platform};

const SAMPLE_PREFIX: &str = "Sample_";
const NEGATIVE_CONTROL_MARKERS: &[&str] = &["NEG", "Neg"];

pub fn platform_root(ngs_root: &Path, platform: Platform) -> PathBuf {
    ngs_root.join(platform.as_str())
}

pub fn project_dir(ngs_root: &Path, platform: Platform, run_id: &str, panel: Panel) -> PathBuf {
    platform_root(ngs_root, platform)
        .join(run_id)
        .join(panel.project_path(platform))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleDir {
    pub accession: String,
    pub path: PathBuf,
}

impl SampleDir {
    pub fn qc_file(&self) -> PathBuf {
        self.path.join(format!("{}.cnv.qc", self.accession))
    }

    pub fn metrics_file(&self) -> PathBuf {
        self.path.join(format!("{}.metrics", self.accession))
    }

    pub fn calls_file(&self) -> PathBuf {
        self.path.join(format!("{}.cnv.bed", self.accession))
    }

    pub fn coverage_file(&self, panel: Panel) -> PathBuf {
        self.path.join(panel.coverage_file_name(&self.accession))
    }
}

pub fn sample_accession(dir_name: &str) -> Option<&str> {
    let accession = dir_name.strip_prefix(SAMPLE_PREFIX)?;
    if NEGATIVE_CONTROL_MARKERS.iter().any(|m| dir_name.contains(m)) {
        return None;
    }
    if accession.is_empty() {
        return None;
    }
    Some(accession)
}

pub fn list_sample_dirs(project_dir: &Path) -> Result<Vec<SampleDir>, InputError> {
    let entries = std::fs::read_dir(project_dir).map_err(|e| InputError::io(project_dir, e))?;
    let mut samples = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| InputError::io(project_dir, e))?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if let Some(accession) = sample_accession(&name) {
            samples.push(SampleDir {
                accession: accession.to_string(),
                path,
            });
        }
    }
    samples.sort_by(|a, b| a.accession.cmp(&b.accession));
    Ok(samples)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/layout.rs"]
mod tests;
