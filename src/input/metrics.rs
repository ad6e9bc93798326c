use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::input::InputError;
use crate::model::records::CnvMetrics;

const SKIP_COLUMNS: usize = 2;
const N_METRICS: usize = 4;

pub fn read_cnv_metrics(path: &Path) -> Result<CnvMetrics, InputError> {
    let reader = BufReader::new(File::open(path).map_err(|e| InputError::io(path, e))?);

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| InputError::io(path, e))?;
        if line.starts_with("sample") || line.trim().is_empty() {
            continue;
        }
        let values = parse_values(path, idx + 1, line.trim_end())?;
        return Ok(CnvMetrics {
            stdev: values[0],
            mad: values[1],
            iqr: values[2],
            bivar: values[3],
        });
    }

    Err(InputError::MissingField {
        path: path.to_path_buf(),
        field: "metrics data row",
    })
}

fn parse_values(path: &Path, line_no: usize, line: &str) -> Result<Vec<f64>, InputError> {
    let fields: Vec<&str> = line.split('\t').skip(SKIP_COLUMNS).collect();
    if fields.len() < N_METRICS {
        return Err(InputError::Parse {
            path: path.to_path_buf(),
            line: line_no,
            message: format!(
                "expected {} metric values, found {}",
                N_METRICS,
                fields.len()
            ),
        });
    }
    if fields.len() > N_METRICS {
        tracing::debug!(
            "ignoring {} trailing metric columns in {}",
            fields.len() - N_METRICS,
            path.display()
        );
    }

    let mut values = Vec::with_capacity(N_METRICS);
    for field in &fields[..N_METRICS] {
        let v = field.trim().parse::<f64>().map_err(|_| InputError::Parse {
            path: path.to_path_buf(),
            line: line_no,
            message: format!("invalid metric value '{}'", field.trim()),
        })?;
        values.push(v);
    }
    Ok(values)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/metrics.rs"]
mod tests;
