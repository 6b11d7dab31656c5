//! Binary that runs the automated tests for a project root and prints
//! deterministic output lines for cross-process verification.
//!
//! Usage: `fixture_run <root>`
//! Output: five lines, each `key=value`:
//!   `exit_status`=0|1
//!   `binary_results`=1,0,...
//!   `input_digest`=sha256:...
//!   `reference_digest`=sha256:...
//!   `detailed_count`=N
//!
//! Exits with the run's own exit status.

use std::path::PathBuf;
use std::process::ExitCode;

use cdtest_fetcher::{FetchPolicy, HttpGreetingFetcher};
use cdtest_harness::automation::run_automated_tests;
use cdtest_harness::config::RunnerConfig;

fn main() -> ExitCode {
    let root = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .expect("usage: fixture_run <root>");
    let config = RunnerConfig::with_root(&root);
    let fetcher = HttpGreetingFetcher::new(FetchPolicy::harness()).expect("build fetcher");
    let report = run_automated_tests(&config, &fetcher).expect("automated run failed");

    let binary: Vec<String> = report
        .outcome
        .binary_results()
        .iter()
        .map(ToString::to_string)
        .collect();

    println!("exit_status={}", report.exit_status());
    println!("binary_results={}", binary.join(","));
    println!("input_digest={}", report.manifest.input_digest);
    println!("reference_digest={}", report.manifest.reference_digest);
    println!("detailed_count={}", report.outcome.results.len());

    ExitCode::from(report.exit_status())
}
