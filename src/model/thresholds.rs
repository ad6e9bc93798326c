use crate::model::records::{CoverageStats, QcVerdict};

#[derive(Debug, Clone, PartialEq)]
pub struct CoverageThresholds {
    pub min_mean_qs: f64,
    pub min_q30: f64,
    pub min_x10: f64,
    pub min_x20: f64,
    pub min_mean_coverage: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegacyThresholds {
    pub min_x10: f64,
    pub min_x20: f64,
    pub min_mean_coverage: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QcThresholds {
    pub coverage: CoverageThresholds,
    pub legacy: LegacyThresholds,
}

impl QcThresholds {
    pub fn default_v1() -> Self {
        Self {
            coverage: CoverageThresholds {
                min_mean_qs: 30.0,
                min_q30: 75.0,
                min_x10: 98.0,
                min_x20: 97.0,
                min_mean_coverage: 70.0,
            },
            // X10/X20 bounds are fractions while the JSON reports percentages;
            // kept as-is so historical old-vs-updated comparisons stay stable.
            legacy: LegacyThresholds {
                min_x10: 0.95,
                min_x20: 0.90,
                min_mean_coverage: 50.0,
            },
        }
    }
}

impl CoverageThresholds {
    pub fn evaluate(&self, stats: &CoverageStats) -> QcVerdict {
        QcVerdict::from_pass(
            stats.mean_qs >= self.min_mean_qs
                && stats.q30 >= self.min_q30
                && stats.x10 >= self.min_x10
                && stats.x20 >= self.min_x20
                && stats.mean_coverage >= self.min_mean_coverage,
        )
    }
}

impl LegacyThresholds {
    pub fn evaluate(&self, stats: &CoverageStats) -> QcVerdict {
        let fail = stats.x10 < self.min_x10
            || stats.x20 < self.min_x20
            || stats.mean_coverage < self.min_mean_coverage;
        QcVerdict::from_pass(!fail)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/thresholds.rs"]
mod tests;
