//! Standalone demo loop: print the greeting, sleep, repeat.
//!
//! Runs until killed unless `--iterations` is given. Requests carry no
//! timeout unless `--timeout-secs` is given.

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing::error;

use cdtest_fetcher::pipeline::{run_pipeline_loop, PipelineConfig};
use cdtest_fetcher::{FetchPolicy, HttpGreetingFetcher, DEFAULT_ENDPOINT};
use cdtest_harness::logging::init_tracing;

#[derive(Parser, Debug)]
#[command(name = "greeting_pipeline")]
#[command(about = "Fetch and print the greeting once per interval")]
struct Cli {
    /// Endpoint to fetch
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    url: String,

    /// Seconds to sleep between fetches
    #[arg(long, default_value_t = 60)]
    interval_secs: u64,

    /// Stop after this many fetches (default: never stop)
    #[arg(long)]
    iterations: Option<u64>,

    /// Per-request timeout in seconds (default: none)
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let policy = match cli.timeout_secs {
        Some(secs) => FetchPolicy::with_timeout(Duration::from_secs(secs)),
        None => FetchPolicy::unbounded(),
    };
    let fetcher = match HttpGreetingFetcher::new(policy) {
        Ok(f) => f,
        Err(e) => {
            error!(error = %e, "cannot build greeting fetcher");
            return ExitCode::FAILURE;
        }
    };

    let config = PipelineConfig {
        url: cli.url,
        interval: Duration::from_secs(cli.interval_secs),
        max_iterations: cli.iterations,
    };
    let mut stdout = std::io::stdout().lock();
    match run_pipeline_loop(&fetcher, &config, &mut stdout) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "cannot write greeting");
            ExitCode::FAILURE
        }
    }
}
