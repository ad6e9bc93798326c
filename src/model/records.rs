use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QcVerdict {
    #[serde(rename = "PASS")]
    Pass,
    #[serde(rename = "FAIL")]
    Fail,
}

impl QcVerdict {
    pub fn from_pass(pass: bool) -> Self {
        if pass { QcVerdict::Pass } else { QcVerdict::Fail }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            QcVerdict::Pass => "PASS",
            QcVerdict::Fail => "FAIL",
        }
    }
}

impl fmt::Display for QcVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CnvMetrics {
    pub stdev: f64,
    pub mad: f64,
    pub iqr: f64,
    pub bivar: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleCnvQc {
    #[serde(skip)]
    pub run_id: String,
    pub sample: String,
    #[serde(rename = "CNV QC")]
    pub cnv_qc: Option<String>,
    pub stdev: Option<f64>,
    pub mad: Option<f64>,
    pub iqr: Option<f64>,
    pub bivar: Option<f64>,
    pub cnv_calls: Option<u64>,
}

impl SampleCnvQc {
    pub fn new(
        run_id: &str,
        sample: &str,
        cnv_qc: Option<String>,
        metrics: Option<CnvMetrics>,
        cnv_calls: Option<u64>,
    ) -> Self {
        Self {
            run_id: run_id.to_string(),
            sample: sample.to_string(),
            cnv_qc,
            stdev: metrics.map(|m| m.stdev),
            mad: metrics.map(|m| m.mad),
            iqr: metrics.map(|m| m.iqr),
            bivar: metrics.map(|m| m.bivar),
            cnv_calls,
        }
    }

    pub fn metrics(&self) -> Option<CnvMetrics> {
        Some(CnvMetrics {
            stdev: self.stdev?,
            mad: self.mad?,
            iqr: self.iqr?,
            bivar: self.bivar?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverageLayout {
    Standard,
    HighDepth,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CoverageStats {
    pub run_id: String,
    pub sample: String,
    pub layout: CoverageLayout,
    pub specificity: f64,
    pub mean_qs: f64,
    pub perfect_index: f64,
    pub q30: f64,
    pub x10: f64,
    pub x20: f64,
    pub x50: f64,
    pub x100: Option<f64>,
    pub x150: Option<f64>,
    pub x500: Option<f64>,
    pub x1000: Option<f64>,
    pub yield_bases: Option<f64>,
    pub pcr_dup_rate: Option<f64>,
    pub mean_coverage: f64,
}

impl CoverageStats {
    pub fn join_sample(&self) -> &str {
        self.sample.strip_suffix(".trim").unwrap_or(&self.sample)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CoverageRecord {
    pub stats: CoverageStats,
    pub coverage_qc: QcVerdict,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedRow {
    pub run_id: String,
    pub sample: String,
    #[serde(rename = "X10")]
    pub x10: Option<f64>,
    #[serde(rename = "X20")]
    pub x20: Option<f64>,
    #[serde(rename = "X50")]
    pub x50: Option<f64>,
    #[serde(rename = "X100")]
    pub x100: Option<f64>,
    pub mean_coverage: Option<f64>,
    #[serde(rename = "Exome_QC_old")]
    pub qc_old: Option<QcVerdict>,
    #[serde(rename = "Exome_QC_updated")]
    pub qc_updated: Option<QcVerdict>,
    // never Some(""): an empty CSV field reads back as None
    #[serde(rename = "CNV QC")]
    pub cnv_qc: Option<String>,
    pub cnv_calls: Option<u64>,
    pub stdev: Option<f64>,
    pub mad: Option<f64>,
    pub iqr: Option<f64>,
    pub bivar: Option<f64>,
    #[serde(rename = "MadIQRBivarSum")]
    pub mad_iqr_bivar_sum: Option<f64>,
}

impl MergedRow {
    pub fn cnv_qc_passed(&self) -> bool {
        self.cnv_qc.as_deref() == Some("PASS")
    }

    // research samples carry RD in the accession
    pub fn is_clinical(&self) -> bool {
        !self.sample.contains("RD")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunStats {
    pub run_id: String,
    #[serde(rename = "X10")]
    pub x10: f64,
    #[serde(rename = "X20")]
    pub x20: f64,
    #[serde(rename = "X50")]
    pub x50: f64,
    #[serde(rename = "X100")]
    pub x100: f64,
    pub mean_coverage: f64,
    pub avg_cnv_calls: f64,
    pub stdev: f64,
    pub mad: f64,
    pub iqr: f64,
    pub bivar: f64,
    #[serde(rename = "MadIQRBivarSum")]
    pub mad_iqr_bivar_sum: f64,
    pub num_samples: usize,
    #[serde(rename = "num_samples_passing_CNVqc")]
    pub num_samples_passing_cnv_qc: usize,
    pub avg_cnv_calls_in_passing_samples: f64,
    #[serde(rename = "CNV_failure_rate")]
    pub cnv_failure_rate: f64,
}

impl RunStats {
    pub const NUMERIC_COLUMNS: &'static [&'static str] = &[
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

    pub fn metric(&self, column: &str) -> Option<f64> {
        let v = match column {
            "X10" => self.x10,
            "X20" => self.x20,
            "X50" => self.x50,
            "X100" => self.x100,
            "mean_coverage" => self.mean_coverage,
            "avg_cnv_calls" => self.avg_cnv_calls,
            "stdev" => self.stdev,
            "mad" => self.mad,
            "iqr" => self.iqr,
            "bivar" => self.bivar,
            "MadIQRBivarSum" => self.mad_iqr_bivar_sum,
            "num_samples" => self.num_samples as f64,
            "num_samples_passing_CNVqc" => self.num_samples_passing_cnv_qc as f64,
            "avg_cnv_calls_in_passing_samples" => self.avg_cnv_calls_in_passing_samples,
            "CNV_failure_rate" => self.cnv_failure_rate,
            _ => return None,
        };
        Some(v)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub group: String,
    #[serde(rename = "X10")]
    pub x10: f64,
    #[serde(rename = "X20")]
    pub x20: f64,
    #[serde(rename = "X50")]
    pub x50: f64,
    #[serde(rename = "X100")]
    pub x100: f64,
    pub mean_coverage: f64,
    pub cnv_calls: f64,
    pub stdev: f64,
    pub mad: f64,
    pub iqr: f64,
    pub bivar: f64,
    #[serde(rename = "MadIQRBivarSum")]
    pub mad_iqr_bivar_sum: f64,
    #[serde(rename = "num_samples_passing_Exomeqc")]
    pub num_samples_passing_exome_qc: usize,
}
