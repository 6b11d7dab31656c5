//! Harness runner: one linear pass over the test cases.
//!
//! The runner uses ONLY the [`FetchGreeting`] contract. It does not build
//! HTTP clients, read fixtures, or write files.
//!
//! # Per-case flow
//!
//! ```text
//! lookup reference ──absent──► score 0, record error, skip fetch
//!        │
//!        ▼
//! fetch(endpoint) ──panic──► score 0, record "ERROR: <panic text>"
//!        │
//!        ▼
//! actual == expected ? 1 : 0
//! ```
//!
//! A failing or panicking case never aborts the remaining cases.

use std::panic::{catch_unwind, AssertUnwindSafe};

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use cdtest_fetcher::FetchGreeting;

use crate::fixture::{CaseId, ReferenceIndex, TestCaseV1};
use crate::summary::RunSummary;

/// 0/1 encoding of one case's outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum BinaryResult {
    Fail,
    Pass,
}

impl BinaryResult {
    #[must_use]
    pub fn from_passed(passed: bool) -> Self {
        if passed {
            Self::Pass
        } else {
            Self::Fail
        }
    }

    #[must_use]
    pub fn as_u8(self) -> u8 {
        match self {
            Self::Fail => 0,
            Self::Pass => 1,
        }
    }
}

impl From<BinaryResult> for u8 {
    fn from(r: BinaryResult) -> Self {
        r.as_u8()
    }
}

impl TryFrom<u8> for BinaryResult {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Fail),
            1 => Ok(Self::Pass),
            other => Err(format!("binary result must be 0 or 1, got {other}")),
        }
    }
}

impl std::fmt::Display for BinaryResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// Per-case record written to `detailed_results.json`.
///
/// Created once per test case and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailedResultV1 {
    pub id: CaseId,
    pub description: String,
    pub endpoint: String,
    /// `None` when the case had no reference entry.
    pub expected: Option<String>,
    /// The fetched greeting, or `"ERROR: ..."` when none was produced.
    pub actual: String,
    pub passed: bool,
    pub binary_result: BinaryResult,
}

/// Results of a full pass, in test-case order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOutcome {
    /// Exactly one entry per test case.
    pub results: Vec<DetailedResultV1>,
}

impl RunOutcome {
    /// Binary results in test-case order.
    #[must_use]
    pub fn binary_results(&self) -> Vec<BinaryResult> {
        self.results.iter().map(|r| r.binary_result).collect()
    }

    #[must_use]
    pub fn summary(&self) -> RunSummary {
        RunSummary::from_binary_results(&self.binary_results())
    }
}

/// Run every case through `fetcher` and score it.
#[must_use]
pub fn run_cases<F>(cases: &[TestCaseV1], references: &ReferenceIndex, fetcher: &F) -> RunOutcome
where
    F: FetchGreeting + ?Sized,
{
    info!(cases = cases.len(), "running automated tests");
    let results = cases
        .iter()
        .map(|case| run_case(case, references, fetcher))
        .collect();
    RunOutcome { results }
}

fn run_case<F>(case: &TestCaseV1, references: &ReferenceIndex, fetcher: &F) -> DetailedResultV1
where
    F: FetchGreeting + ?Sized,
{
    let Some(reference) = references.get(&case.id) else {
        error!(case_id = %case.id, "no reference data found for test case");
        return failed(
            case,
            None,
            format!("ERROR: no reference data found for test ID {}", case.id),
        );
    };
    let expected = reference.expected_result.clone();

    info!(case_id = %case.id, description = %case.description, endpoint = %case.endpoint, "running case");

    let fetched = catch_unwind(AssertUnwindSafe(|| fetcher.fetch(&case.endpoint)));
    let greeting = match fetched {
        Ok(greeting) => greeting,
        Err(payload) => {
            let detail = panic_detail(&*payload);
            error!(case_id = %case.id, error = %detail, "exception during test execution");
            return failed(case, Some(expected), format!("ERROR: {detail}"));
        }
    };

    let actual = greeting.as_str().to_string();
    let passed = actual == expected;
    let binary_result = BinaryResult::from_passed(passed);
    info!(
        case_id = %case.id,
        expected = %expected,
        actual = %actual,
        result = binary_result.as_u8(),
        "{}",
        if passed { "PASS" } else { "FAIL" }
    );

    DetailedResultV1 {
        id: case.id.clone(),
        description: case.description.clone(),
        endpoint: case.endpoint.clone(),
        expected: Some(expected),
        actual,
        passed,
        binary_result,
    }
}

fn failed(case: &TestCaseV1, expected: Option<String>, actual: String) -> DetailedResultV1 {
    DetailedResultV1 {
        id: case.id.clone(),
        description: case.description.clone(),
        endpoint: case.endpoint.clone(),
        expected,
        actual,
        passed: false,
        binary_result: BinaryResult::Fail,
    }
}

/// Extract a printable message from a panic payload.
fn panic_detail(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "panic with non-string payload".to_string()
    }
}
