//! Headline counts for the metrics panel.

use crate::data::LabRecord;

/// Conclusion value counted as compliant. Every other value counts as failed.
pub const PASS_LABEL: &str = "Pass";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassFailMetrics {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
}

impl PassFailMetrics {
    pub fn from_records(records: &[&LabRecord], pass_label: &str) -> Self {
        let total = records.len();
        let passed = records
            .iter()
            .filter(|record| record.conclusion == pass_label)
            .count();

        Self {
            total,
            passed,
            failed: total - passed,
        }
    }
}
