//! Shared helpers for cd-test benchmark suites.

use cdtest_fetcher::{FetchGreeting, Greeting, FAILURE_GREETING, SUCCESS_GREETING};
use cdtest_harness::fixture::{CaseId, ReferenceEntryV1, ReferenceIndex, TestCaseV1};

/// In-process fetcher: even case endpoints succeed, odd ones fail.
///
/// Keeps the network out of runner timings.
pub struct CannedFetcher;

impl FetchGreeting for CannedFetcher {
    fn fetch(&self, endpoint: &str) -> Greeting {
        if endpoint.ends_with("/even") {
            Greeting::Success
        } else {
            Greeting::Failure
        }
    }
}

/// `n` synthetic cases with a reference for every case except each tenth.
///
/// Expectations are chosen so that roughly half the referenced cases pass.
#[must_use]
pub fn synthetic_fixtures(n: usize) -> (Vec<TestCaseV1>, ReferenceIndex) {
    let mut cases = Vec::with_capacity(n);
    let mut references = Vec::with_capacity(n);
    for i in 0..n {
        #[allow(clippy::cast_possible_wrap)]
        let id = CaseId::Int(i as i64);
        let parity = if i % 2 == 0 { "even" } else { "odd" };
        cases.push(TestCaseV1 {
            id: id.clone(),
            endpoint: format!("http://bench.invalid/{parity}"),
            description: format!("synthetic case {i}"),
        });
        if i % 10 != 9 {
            let expected = if i % 4 < 2 {
                SUCCESS_GREETING
            } else {
                FAILURE_GREETING
            };
            references.push(ReferenceEntryV1 {
                id,
                expected_result: expected.to_string(),
            });
        }
    }
    (cases, ReferenceIndex::build(references))
}
