//! Standalone pipeline loop: fetch, print, sleep, repeat.
//!
//! Demo mode only. With no iteration cap the loop never returns on its own;
//! the process is expected to be stopped externally.

use std::io::Write;
use std::time::Duration;

use tracing::info;

use crate::contract::FetchGreeting;

/// Pause between iterations of the standalone loop.
pub const PIPELINE_INTERVAL: Duration = Duration::from_secs(60);

/// Loop parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Endpoint fetched on every iteration.
    pub url: String,
    /// Sleep between iterations.
    pub interval: Duration,
    /// Stop after this many iterations. `None` loops forever.
    pub max_iterations: Option<u64>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            url: crate::greeting::DEFAULT_ENDPOINT.to_string(),
            interval: PIPELINE_INTERVAL,
            max_iterations: None,
        }
    }
}

/// Run the loop, writing one greeting line per iteration to `sink`.
///
/// At least one iteration always runs, so a cap of `Some(0)` behaves like
/// `Some(1)`. No sleep follows the final capped iteration. Returns the
/// number of iterations completed.
///
/// # Errors
///
/// Returns the I/O error if writing to `sink` fails.
pub fn run_pipeline_loop<F, W>(
    fetcher: &F,
    config: &PipelineConfig,
    sink: &mut W,
) -> std::io::Result<u64>
where
    F: FetchGreeting + ?Sized,
    W: Write + ?Sized,
{
    let mut completed: u64 = 0;
    loop {
        let greeting = fetcher.fetch(&config.url);
        writeln!(sink, "{greeting}")?;
        sink.flush()?;
        completed += 1;
        info!(iteration = completed, url = %config.url, success = greeting.is_success(), "pipeline tick");

        if config.max_iterations.is_some_and(|max| completed >= max) {
            return Ok(completed);
        }
        std::thread::sleep(config.interval);
    }
}
