use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde_json::{Map, Value};

use crate::input::InputError;
use crate::model::records::{CoverageLayout, CoverageStats};

pub fn read_coverage(
    path: &Path,
    run_id: &str,
    accession: &str,
) -> Result<CoverageStats, InputError> {
    let reader = BufReader::new(File::open(path).map_err(|e| InputError::io(path, e))?);
    let value: Value = serde_json::from_reader(reader).map_err(|source| InputError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    let Value::Object(map) = value else {
        return Err(InputError::Parse {
            path: path.to_path_buf(),
            line: 1,
            message: "coverage JSON is not an object".to_string(),
        });
    };
    coverage_from_map(path, &map, run_id, accession)
}

fn coverage_from_map(
    path: &Path,
    map: &Map<String, Value>,
    run_id: &str,
    accession: &str,
) -> Result<CoverageStats, InputError> {
    let num = |key: &'static str| number_field(path, map, key);

    let sample = match map.get("sample") {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        _ => accession.to_string(),
    };

    let layout = if map.contains_key("X1000") {
        CoverageLayout::HighDepth
    } else {
        CoverageLayout::Standard
    };

    let mut stats = CoverageStats {
        run_id: run_id.to_string(),
        sample,
        layout,
        specificity: num("specificity")?,
        mean_qs: num("mean_QS")?,
        perfect_index: num("perfect_index")?,
        q30: num("q30")?,
        x10: num("X10")?,
        x20: num("X20")?,
        x50: num("X50")?,
        x100: None,
        x150: None,
        x500: None,
        x1000: None,
        yield_bases: None,
        pcr_dup_rate: None,
        mean_coverage: num("mean_coverage")?,
    };

    match layout {
        CoverageLayout::HighDepth => {
            stats.x150 = Some(num("X150")?);
            stats.x500 = Some(num("X500")?);
            stats.x1000 = Some(num("X1000")?);
            stats.yield_bases = Some(num("yield")?);
        }
        CoverageLayout::Standard => {
            stats.x100 = Some(num("X100")?);
            stats.pcr_dup_rate = Some(num("pcr_dup_rate")?);
        }
    }

    Ok(stats)
}

fn number_field(path: &Path, map: &Map<String, Value>, key: &'static str) -> Result<f64, InputError> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(0.0),
        Some(Value::Number(n)) => Ok(n.as_f64().unwrap_or(0.0)),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(0.0),
        Some(Value::String(s)) => s.trim().parse::<f64>().map_err(|_| InputError::Parse {
            path: path.to_path_buf(),
            line: 1,
            message: format!("field {key} is not numeric: '{s}'"),
        }),
        Some(other) => Err(InputError::Parse {
            path: path.to_path_buf(),
            line: 1,
            message: format!("field {key} is not numeric: {other}"),
        }),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/coverage.rs"]
mod tests;
