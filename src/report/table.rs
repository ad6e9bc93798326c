use std::path::Path;

use serde::Serialize;

use crate::model::records::{MergedRow, RunStats, SampleCnvQc, SummaryRow};
use crate::report::ReportError;

// COLUMNS lists the serialized field names in declaration order.
pub trait TableRow: Serialize {
    const COLUMNS: &'static [&'static str];
}

impl TableRow for SampleCnvQc {
    const COLUMNS: &'static [&'static str] =
        &["sample", "CNV QC", "stdev", "mad", "iqr", "bivar", "cnv_calls"];
}

impl TableRow for MergedRow {
    const COLUMNS: &'static [&'static str] = &[
        "run_id",
        "sample",
        "X10",
        "X20",
        "X50",
        "X100",
        "mean_coverage",
        "Exome_QC_old",
        "Exome_QC_updated",
        "CNV QC",
        "cnv_calls",
        "stdev",
        "mad",
        "iqr",
        "bivar",
        "MadIQRBivarSum",
    ];
}

impl TableRow for RunStats {
    const COLUMNS: &'static [&'static str] = &[
        "run_id",
        "X10",
        "X20",
        "X50",
        "X100",
        "mean_coverage",
        "avg_cnv_calls",
        "stdev",
        "mad",
        "iqr",
        "bivar",
        "MadIQRBivarSum",
        "num_samples",
        "num_samples_passing_CNVqc",
        "avg_cnv_calls_in_passing_samples",
        "CNV_failure_rate",
    ];
}

impl TableRow for SummaryRow {
    const COLUMNS: &'static [&'static str] = &[
        "group",
        "X10",
        "X20",
        "X50",
        "X100",
        "mean_coverage",
        "cnv_calls",
        "stdev",
        "mad",
        "iqr",
        "bivar",
        "MadIQRBivarSum",
        "num_samples_passing_Exomeqc",
    ];
}

pub fn write_table<T: TableRow>(path: &Path, rows: &[T]) -> Result<(), ReportError> {
    let csv_err = |source| ReportError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut w = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(csv_err)?;
    w.write_record(T::COLUMNS).map_err(csv_err)?;
    for row in rows {
        w.serialize(row).map_err(csv_err)?;
    }
    w.flush().map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub fn write_records<I>(path: &Path, columns: &[&str], records: I) -> Result<(), ReportError>
where
    I: IntoIterator<Item = Vec<String>>,
{
    let csv_err = |source| ReportError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut w = csv::Writer::from_path(path).map_err(csv_err)?;
    w.write_record(columns).map_err(csv_err)?;
    for record in records {
        w.write_record(&record).map_err(csv_err)?;
    }
    w.flush().map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/table.rs"]
mod tests;
