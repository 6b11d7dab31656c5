//! Runner configuration: fixture locations, output directory, fetch policy.
//!
//! Defaults are the fixed relative paths the CI job relies on. The CLI
//! resolves them against a project root and lets individual flags override.

use std::path::{Path, PathBuf};

use cdtest_fetcher::FetchPolicy;

pub const DEFAULT_INPUT_PATH: &str = "test_data/input_data.json";
pub const DEFAULT_REFERENCE_PATH: &str = "test_data/reference_data.json";
pub const DEFAULT_OUTPUT_DIR: &str = "test_results";

/// Everything a harness run needs besides the fetcher itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Array of test cases.
    pub input_path: PathBuf,
    /// Array of reference entries.
    pub reference_path: PathBuf,
    /// Created if absent.
    pub output_dir: PathBuf,
    pub fetch_policy: FetchPolicy,
}

impl RunnerConfig {
    /// Default layout rooted at `root`.
    #[must_use]
    pub fn with_root(root: &Path) -> Self {
        Self {
            input_path: root.join(DEFAULT_INPUT_PATH),
            reference_path: root.join(DEFAULT_REFERENCE_PATH),
            output_dir: root.join(DEFAULT_OUTPUT_DIR),
            fetch_policy: FetchPolicy::harness(),
        }
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            reference_path: PathBuf::from(DEFAULT_REFERENCE_PATH),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            fetch_policy: FetchPolicy::harness(),
        }
    }
}
