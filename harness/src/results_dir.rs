//! Results directory persistence.
//!
//! # Directory layout
//!
//! ```text
//! <dir>/
//!   binary_results.txt      — one "0" or "1" per line, test-case order
//!   detailed_results.json   — pretty-printed JSON array of DetailedResultV1
//!   run_manifest.json       — fixture digests + summary
//! ```
//!
//! The directory is created if absent. All three files are first written to
//! temp files in the same directory, then renamed into place with
//! `binary_results.txt` last. A failed write replaces nothing; a failed
//! rename leaves `binary_results.txt` from the previous run untouched.
//! Temp files are removed on every error path.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::digest::ContentDigest;
use crate::runner::{BinaryResult, RunOutcome};
use crate::summary::RunSummary;

pub const BINARY_RESULTS_FILENAME: &str = "binary_results.txt";
pub const DETAILED_RESULTS_FILENAME: &str = "detailed_results.json";
pub const RUN_MANIFEST_FILENAME: &str = "run_manifest.json";

/// Schema tag for [`RunManifestV1`].
pub const RUN_MANIFEST_SCHEMA: &str = "run_manifest.v1";

/// Binds a results directory to the fixtures it was produced from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunManifestV1 {
    pub schema_version: String,
    pub input_digest: ContentDigest,
    pub reference_digest: ContentDigest,
    pub summary: RunSummary,
}

impl RunManifestV1 {
    #[must_use]
    pub fn new(
        input_digest: ContentDigest,
        reference_digest: ContentDigest,
        summary: RunSummary,
    ) -> Self {
        Self {
            schema_version: RUN_MANIFEST_SCHEMA.to_string(),
            input_digest,
            reference_digest,
            summary,
        }
    }
}

/// Paths of the files written by [`write_results`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultPaths {
    pub binary_results: PathBuf,
    pub detailed_results: PathBuf,
    pub run_manifest: PathBuf,
}

/// Error writing the results directory.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResultsWriteError {
    /// I/O error during write.
    #[error("I/O error: {detail}")]
    Io { detail: String },
    /// JSON serialization failed.
    #[error("serialization error: {detail}")]
    Serialize { detail: String },
}

/// Error reading back a results file.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResultsReadError {
    #[error("I/O error: {detail}")]
    Io { detail: String },
    /// A line of `binary_results.txt` is not `0` or `1`.
    #[error("line {line}: expected 0 or 1, found {found:?}")]
    InvalidLine { line: usize, found: String },
}

/// Write the binary results, the detailed report, and the run manifest.
///
/// # Errors
///
/// Returns [`ResultsWriteError`] on I/O failure or serialization error.
pub fn write_results(
    dir: &Path,
    outcome: &RunOutcome,
    manifest: &RunManifestV1,
) -> Result<ResultPaths, ResultsWriteError> {
    std::fs::create_dir_all(dir).map_err(|e| ResultsWriteError::Io {
        detail: format!("create_dir_all {}: {e}", dir.display()),
    })?;

    let paths = ResultPaths {
        binary_results: dir.join(BINARY_RESULTS_FILENAME),
        detailed_results: dir.join(DETAILED_RESULTS_FILENAME),
        run_manifest: dir.join(RUN_MANIFEST_FILENAME),
    };

    let binary = render_binary_results(&outcome.binary_results());
    let detailed = serde_json::to_vec_pretty(&outcome.results).map_err(|e| {
        ResultsWriteError::Serialize {
            detail: format!("{DETAILED_RESULTS_FILENAME}: {e}"),
        }
    })?;
    let manifest_bytes =
        serde_json::to_vec_pretty(manifest).map_err(|e| ResultsWriteError::Serialize {
            detail: format!("{RUN_MANIFEST_FILENAME}: {e}"),
        })?;

    // The manifest goes first and binary_results.txt last: a consumer that
    // sees the new binary results also sees the report and manifest beside it.
    let staged = [
        (paths.run_manifest.as_path(), manifest_bytes.as_slice()),
        (paths.detailed_results.as_path(), detailed.as_slice()),
        (paths.binary_results.as_path(), binary.as_bytes()),
    ];
    let mut temps = Vec::with_capacity(staged.len());
    for (target, content) in staged {
        match stage(dir, target, content) {
            Ok(temp) => temps.push((temp, target)),
            Err(e) => {
                discard(temps.iter().map(|(temp, _)| temp.as_path()));
                return Err(e);
            }
        }
    }
    for (i, (temp, target)) in temps.iter().enumerate() {
        if let Err(e) = std::fs::rename(temp, target) {
            discard(temps[i..].iter().map(|(temp, _)| temp.as_path()));
            return Err(ResultsWriteError::Io {
                detail: format!("rename {} → {}: {e}", temp.display(), target.display()),
            });
        }
    }

    Ok(paths)
}

/// Read `binary_results.txt` from `dir`.
///
/// # Errors
///
/// Returns [`ResultsReadError::InvalidLine`] for any line other than `0`
/// or `1`, or [`ResultsReadError::Io`] if the file cannot be read.
pub fn read_binary_results(dir: &Path) -> Result<Vec<BinaryResult>, ResultsReadError> {
    let path = dir.join(BINARY_RESULTS_FILENAME);
    let text = std::fs::read_to_string(&path).map_err(|e| ResultsReadError::Io {
        detail: format!("read {}: {e}", path.display()),
    })?;
    text.lines()
        .enumerate()
        .map(|(i, line)| match line {
            "0" => Ok(BinaryResult::Fail),
            "1" => Ok(BinaryResult::Pass),
            other => Err(ResultsReadError::InvalidLine {
                line: i + 1,
                found: other.to_string(),
            }),
        })
        .collect()
}

fn render_binary_results(results: &[BinaryResult]) -> String {
    results.iter().map(|r| format!("{r}\n")).collect()
}

/// Write `content` to a temp file next to `target` and return its path.
fn stage(dir: &Path, target: &Path, content: &[u8]) -> Result<PathBuf, ResultsWriteError> {
    let temp_name = format!(
        ".tmp_{}",
        target.file_name().unwrap_or_default().to_string_lossy()
    );
    let temp_path = dir.join(temp_name);
    if let Err(e) = std::fs::write(&temp_path, content) {
        discard([temp_path.as_path()]);
        return Err(ResultsWriteError::Io {
            detail: format!("write {}: {e}", temp_path.display()),
        });
    }
    Ok(temp_path)
}

/// Best-effort removal of staged temp files.
fn discard<'a>(temps: impl IntoIterator<Item = &'a Path>) {
    for temp in temps {
        let _ = std::fs::remove_file(temp);
    }
}
