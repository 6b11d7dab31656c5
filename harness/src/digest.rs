//! Content digests binding a results directory to its fixture bytes.
//!
//! Digests are plain SHA-256 over the raw file bytes (no domain prefix), so
//! `sha256sum test_data/input_data.json` reproduces the hex portion.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// A content digest in `"sha256:<hex>"` form.
///
/// Deserialization goes through [`ContentDigest::parse`], so a stored digest
/// is always well-formed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContentDigest(String);

impl ContentDigest {
    const PREFIX: &'static str = "sha256:";

    /// Digest `bytes`.
    #[must_use]
    pub fn of(bytes: &[u8]) -> Self {
        let hash = Sha256::digest(bytes);
        Self(format!("{}{}", Self::PREFIX, hex::encode(hash)))
    }

    /// Parse a stored `"sha256:<64 hex>"` string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let hex_part = s.strip_prefix(Self::PREFIX)?;
        if hex_part.len() != 64 || !hex_part.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        Some(Self(s.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The hex portion without the algorithm prefix.
    #[must_use]
    pub fn hex_digest(&self) -> &str {
        self.0.strip_prefix(Self::PREFIX).unwrap_or_default()
    }
}

impl TryFrom<String> for ContentDigest {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("malformed content digest {value:?}"))
    }
}

impl From<ContentDigest> for String {
    fn from(d: ContentDigest) -> Self {
        d.0
    }
}

impl std::fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
