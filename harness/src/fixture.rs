//! Fixture loading: test cases, reference expectations, and the id join.
//!
//! Both fixtures are JSON arrays read once at startup. A fixture that is
//! missing or malformed is fatal for the run; a test case whose id has no
//! reference entry is not (the runner scores it 0).

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::digest::ContentDigest;

/// Identifier joining a test case to its reference entry.
///
/// Fixtures normally use integers. Any JSON integer that fits in `i64` or
/// `u64` is accepted, as are strings; an integer id never matches a string
/// id even when they print the same. Floats (`1.0`), `null`, booleans and
/// composite values are rejected, which fails the whole fixture.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CaseId {
    Int(i64),
    /// Only produced for values above `i64::MAX`.
    UInt(u64),
    Text(String),
}

impl std::fmt::Display for CaseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::UInt(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for CaseId {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<&str> for CaseId {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// One entry of `input_data.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCaseV1 {
    pub id: CaseId,
    /// URL handed to the fetcher.
    pub endpoint: String,
    /// Free text, echoed into logs and the detailed report.
    pub description: String,
}

/// One entry of `reference_data.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceEntryV1 {
    pub id: CaseId,
    /// The literal greeting the case is expected to produce.
    pub expected_result: String,
}

/// Error loading a fixture file.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FixtureError {
    /// The file could not be read.
    #[error("cannot read fixture {}: {detail}", .path.display())]
    Io { path: PathBuf, detail: String },
    /// The file is not a JSON array of the expected records.
    #[error("invalid fixture {}: {detail}", .path.display())]
    Parse { path: PathBuf, detail: String },
}

/// Reference entries keyed by id.
///
/// Built from declaration order; a later duplicate id replaces an earlier one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceIndex {
    by_id: BTreeMap<CaseId, ReferenceEntryV1>,
}

impl ReferenceIndex {
    #[must_use]
    pub fn build(entries: impl IntoIterator<Item = ReferenceEntryV1>) -> Self {
        let by_id = entries.into_iter().map(|e| (e.id.clone(), e)).collect();
        Self { by_id }
    }

    #[must_use]
    pub fn get(&self, id: &CaseId) -> Option<&ReferenceEntryV1> {
        self.by_id.get(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// Both fixtures, loaded and digested.
#[derive(Debug, Clone)]
pub struct FixtureSet {
    /// Test cases in declaration order.
    pub cases: Vec<TestCaseV1>,
    pub references: ReferenceIndex,
    /// Digest of the raw `input_data.json` bytes.
    pub input_digest: ContentDigest,
    /// Digest of the raw `reference_data.json` bytes.
    pub reference_digest: ContentDigest,
}

impl FixtureSet {
    /// Load the test-case fixture and the reference fixture.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError`] if either file is unreadable or malformed.
    pub fn load(input_path: &Path, reference_path: &Path) -> Result<Self, FixtureError> {
        let (cases, input_digest) = read_array::<TestCaseV1>(input_path)?;
        let (entries, reference_digest) = read_array::<ReferenceEntryV1>(reference_path)?;
        Ok(Self {
            cases,
            references: ReferenceIndex::build(entries),
            input_digest,
            reference_digest,
        })
    }
}

/// Load `input_data.json`.
///
/// # Errors
///
/// Returns [`FixtureError`] if the file is unreadable or malformed.
pub fn load_test_cases(path: &Path) -> Result<Vec<TestCaseV1>, FixtureError> {
    read_array(path).map(|(cases, _)| cases)
}

/// Load `reference_data.json`.
///
/// # Errors
///
/// Returns [`FixtureError`] if the file is unreadable or malformed.
pub fn load_reference_entries(path: &Path) -> Result<Vec<ReferenceEntryV1>, FixtureError> {
    read_array(path).map(|(entries, _)| entries)
}

fn read_array<T: DeserializeOwned>(path: &Path) -> Result<(Vec<T>, ContentDigest), FixtureError> {
    let bytes = std::fs::read(path).map_err(|e| FixtureError::Io {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })?;
    let items = serde_json::from_slice(&bytes).map_err(|e| FixtureError::Parse {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })?;
    Ok((items, ContentDigest::of(&bytes)))
}
