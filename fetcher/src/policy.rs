//! Fetch policy: the timeout bound applied to every request.

use std::time::Duration;

/// Timeout used by the fixture harness.
pub const HARNESS_TIMEOUT: Duration = Duration::from_secs(5);

/// Request policy for an [`crate::HttpGreetingFetcher`].
///
/// `Default` is the harness policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchPolicy {
    /// Total request timeout. `None` sets no explicit bound.
    pub timeout: Option<Duration>,
}

impl FetchPolicy {
    /// The bounded policy used by the fixture runner.
    #[must_use]
    pub fn harness() -> Self {
        Self {
            timeout: Some(HARNESS_TIMEOUT),
        }
    }

    /// No explicit timeout. Used by the standalone pipeline loop.
    #[must_use]
    pub fn unbounded() -> Self {
        Self { timeout: None }
    }

    /// Policy with a caller-chosen bound.
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
        }
    }
}

impl Default for FetchPolicy {
    fn default() -> Self {
        Self::harness()
    }
}
