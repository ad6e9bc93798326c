use std::path::PathBuf;

use thiserror::Error;

pub mod plot;
pub mod regression;
pub mod table;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("unable to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unable to write table {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("unable to render plot {}: {message}", path.display())]
    Plot { path: PathBuf, message: String },
}

pub fn mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let mut sum = 0.0;
    let mut n = 0usize;
    for v in values {
        sum += v;
        n += 1;
    }
    if n == 0 { None } else { Some(sum / n as f64) }
}

pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
