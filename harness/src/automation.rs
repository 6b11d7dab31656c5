//! Automated test run: load → run → persist.
//!
//! Fatal errors (unreadable fixtures, unwritable results) abort the run and
//! surface as [`HarnessError`]. Per-case failures never do; they are scored
//! by the runner.

use std::path::PathBuf;

use tracing::info;

use cdtest_fetcher::{FetchError, FetchGreeting};

use crate::config::RunnerConfig;
use crate::fixture::{FixtureError, FixtureSet};
use crate::results_dir::{write_results, ResultPaths, ResultsWriteError, RunManifestV1};
use crate::runner::{run_cases, RunOutcome};
use crate::summary::RunSummary;

/// Fatal error for a whole run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HarnessError {
    /// A fixture could not be loaded.
    #[error("fixture load failed: {0}")]
    Fixture(#[from] FixtureError),
    /// Results could not be saved.
    #[error("saving results to {} failed: {source}", .dir.display())]
    Results {
        dir: PathBuf,
        source: ResultsWriteError,
    },
    /// The HTTP fetcher could not be constructed.
    #[error("fetcher unavailable: {0}")]
    Fetcher(#[from] FetchError),
}

/// Everything a completed run produced.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub outcome: RunOutcome,
    pub summary: RunSummary,
    pub manifest: RunManifestV1,
    pub paths: ResultPaths,
}

impl RunReport {
    /// Process exit status for this run.
    #[must_use]
    pub fn exit_status(&self) -> u8 {
        self.summary.exit_status()
    }

    /// Summary block for stdout.
    #[must_use]
    pub fn render(&self) -> String {
        self.summary.render(&self.outcome.binary_results())
    }
}

/// Load the fixtures named by `config`, run every case through `fetcher`,
/// and write the results directory.
///
/// # Errors
///
/// Returns [`HarnessError::Fixture`] if either fixture cannot be loaded,
/// or [`HarnessError::Results`] if the output files cannot be written.
pub fn run_automated_tests<F>(config: &RunnerConfig, fetcher: &F) -> Result<RunReport, HarnessError>
where
    F: FetchGreeting + ?Sized,
{
    info!(
        input = %config.input_path.display(),
        reference = %config.reference_path.display(),
        "loading test data"
    );
    let fixtures = FixtureSet::load(&config.input_path, &config.reference_path)?;

    let outcome = run_cases(&fixtures.cases, &fixtures.references, fetcher);
    let summary = outcome.summary();
    let manifest = RunManifestV1::new(
        fixtures.input_digest,
        fixtures.reference_digest,
        summary.clone(),
    );

    let paths = write_results(&config.output_dir, &outcome, &manifest).map_err(|source| {
        HarnessError::Results {
            dir: config.output_dir.clone(),
            source,
        }
    })?;
    info!(path = %paths.binary_results.display(), "binary results saved");
    info!(path = %paths.detailed_results.display(), "detailed results saved");

    Ok(RunReport {
        outcome,
        summary,
        manifest,
        paths,
    })
}
