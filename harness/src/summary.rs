//! Run summary: counts, success rate, and the process exit status.

use serde::{Deserialize, Serialize};

use crate::runner::BinaryResult;

/// Exit status when every case passed.
pub const EXIT_ALL_PASSED: u8 = 0;

/// Exit status when any case failed or the run could not complete.
pub const EXIT_FAILURE: u8 = 1;

const RULE: &str = "============================================================";

/// Aggregate counts for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    /// Percentage of passed cases; `0.0` for an empty run.
    pub success_rate: f64,
}

impl RunSummary {
    #[must_use]
    pub fn from_binary_results(results: &[BinaryResult]) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|r| **r == BinaryResult::Pass).count();
        let failed = total - passed;
        #[allow(clippy::cast_precision_loss)]
        let success_rate = if total == 0 {
            0.0
        } else {
            passed as f64 / total as f64 * 100.0
        };
        Self {
            total,
            passed,
            failed,
            success_rate,
        }
    }

    /// True when no case failed. An empty run counts as passed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    #[must_use]
    pub fn exit_status(&self) -> u8 {
        if self.all_passed() {
            EXIT_ALL_PASSED
        } else {
            EXIT_FAILURE
        }
    }

    /// Human-readable summary block printed at the end of a run.
    #[must_use]
    pub fn render(&self, binary_results: &[BinaryResult]) -> String {
        let listed: Vec<String> = binary_results.iter().map(ToString::to_string).collect();
        let verdict = if self.all_passed() {
            "ALL TESTS PASSED - pipeline can proceed".to_string()
        } else {
            format!("{} TESTS FAILED - pipeline should be blocked", self.failed)
        };
        format!(
            "{RULE}\nTEST SUMMARY\n{RULE}\n\
             Total tests:    {}\n\
             Passed:         {}\n\
             Failed:         {}\n\
             Success rate:   {:.1}%\n\
             Binary results: [{}]\n\n\
             {verdict}\n",
            self.total,
            self.passed,
            self.failed,
            self.success_rate,
            listed.join(", "),
        )
    }
}
