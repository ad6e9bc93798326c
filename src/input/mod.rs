use std::path::PathBuf;

use thiserror::Error;

pub mod calls;
pub mod coverage;
pub mod layout;
pub mod metrics;
pub mod qc;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("missing file {}", path.display())]
    Missing { path: PathBuf },
    #[error("missing {field} in {}", path.display())]
    MissingField { path: PathBuf, field: &'static str },
    #[error("parse error in {} line {line}: {message}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },
    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl InputError {
    pub fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        InputError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn require_file(path: &std::path::Path) -> Result<(), Self> {
        if path.is_file() {
            Ok(())
        } else {
            Err(InputError::Missing {
                path: path.to_path_buf(),
            })
        }
    }

    pub fn path(&self) -> &std::path::Path {
        match self {
            InputError::Io { path, .. }
            | InputError::Missing { path }
            | InputError::MissingField { path, .. }
            | InputError::Parse { path, .. }
            | InputError::Json { path, .. } => path,
        }
    }
}
