use std::fmt;
use std::path::{Path, PathBuf};

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Platform {
    #[value(name = "Nextseq")]
    Nextseq,
    #[value(name = "Novaseq")]
    Novaseq,
}

impl Platform {
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Nextseq => "Nextseq",
            Platform::Novaseq => "Novaseq",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Panel {
    #[value(name = "Exome")]
    Exome,
    #[value(name = "Neuropathy")]
    Neuropathy,
    #[value(name = "LynchHRD")]
    LynchHrd,
}

impl Panel {
    pub fn as_str(self) -> &'static str {
        match self {
            Panel::Exome => "Exome",
            Panel::Neuropathy => "Neuropathy",
            Panel::LynchHrd => "LynchHRD",
        }
    }

    // Novaseq exomes live under project 298 instead of 98.
    pub fn project_path(self, platform: Platform) -> PathBuf {
        let (aligned, project) = match (self, platform) {
            (Panel::Exome, Platform::Nextseq) => ("Aligned_Exomes_SGE", "Project_98_Exome"),
            (Panel::Exome, Platform::Novaseq) => ("Aligned_Exomes_SGE", "Project_298_Exome"),
            (Panel::Neuropathy, _) => ("Aligned_Panel_9801_SGE", "Project_9801_Neuropathy"),
            (Panel::LynchHrd, _) => ("Aligned_Panel_283_SGE", "Project_283_lynchHRD"),
        };
        Path::new(aligned).join(project)
    }

    pub fn coverage_file_name(self, accession: &str) -> String {
        match self {
            Panel::Neuropathy => format!("{accession}.trim.coverage.json"),
            Panel::Exome | Panel::LynchHrd => format!("{accession}.coverage.json"),
        }
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
