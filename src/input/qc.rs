use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::input::InputError;

const QC_TAG: &str = "#QC";

pub fn read_qc_status(path: &Path) -> Result<String, InputError> {
    let reader = BufReader::new(File::open(path).map_err(|e| InputError::io(path, e))?);

    let mut status = None;
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| InputError::io(path, e))?;
        if !line.starts_with(QC_TAG) {
            continue;
        }
        let token = line.trim().split(' ').nth(1).filter(|t| !t.is_empty());
        match token {
            Some(t) => status = Some(t.to_string()),
            None => {
                return Err(InputError::Parse {
                    path: path.to_path_buf(),
                    line: idx + 1,
                    message: "#QC line has no status".to_string(),
                });
            }
        }
    }

    status.ok_or_else(|| InputError::MissingField {
        path: path.to_path_buf(),
        field: "#QC status line",
    })
}
