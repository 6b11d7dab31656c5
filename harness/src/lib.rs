//! cd-test harness: fixture-driven replay of the greeting fetcher.
//!
//! The harness loads test cases and reference expectations from JSON
//! fixtures, runs each case through a [`cdtest_fetcher::FetchGreeting`]
//! implementation, scores it 0/1, and persists the results.
//!
//! # Pipeline
//!
//! ```text
//! FixtureSet::load() → run_cases() → [fetch() × N]
//!   → RunOutcome::summary() → write_results() → exit status
//! ```
//!
//! The harness does NOT talk to the network itself; the fetcher owns
//! transport and error normalization.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod automation;
pub mod config;
pub mod digest;
pub mod fixture;
pub mod logging;
pub mod results_dir;
pub mod runner;
pub mod summary;
