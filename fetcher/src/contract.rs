//! Fetcher contract: the seam between the runner and the network.
//!
//! The runner only ever sees a [`Greeting`]. Implementations own transport,
//! timeouts, and error normalization; the runner owns comparison, scoring,
//! and persistence.

use crate::greeting::Greeting;

/// Something that can turn an endpoint into a greeting.
///
/// Implementations must not retry and must not cache across calls: one
/// invocation is one attempt.
pub trait FetchGreeting {
    /// Fetch the greeting for `endpoint`.
    ///
    /// Infallible by contract. Transport failures are reported as
    /// [`Greeting::Failure`].
    fn fetch(&self, endpoint: &str) -> Greeting;
}

impl<F: FetchGreeting + ?Sized> FetchGreeting for &F {
    fn fetch(&self, endpoint: &str) -> Greeting {
        (**self).fetch(endpoint)
    }
}
