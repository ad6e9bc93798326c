use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::input::InputError;

pub fn count_cnv_calls(path: &Path) -> Result<u64, InputError> {
    let reader = BufReader::new(File::open(path).map_err(|e| InputError::io(path, e))?);
    let mut count = 0u64;
    for line in reader.lines() {
        let line = line.map_err(|e| InputError::io(path, e))?;
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        count += 1;
    }
    Ok(count)
}
