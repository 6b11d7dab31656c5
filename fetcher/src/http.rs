//! Blocking HTTP implementation of [`FetchGreeting`].
//!
//! One GET, no body, no retries. Only the status code is inspected.

use reqwest::blocking::Client;
use tracing::{debug, warn};

use crate::contract::FetchGreeting;
use crate::greeting::{Greeting, DEFAULT_ENDPOINT};
use crate::policy::FetchPolicy;

/// User agent sent with every request. Some public APIs reject requests
/// that carry none.
const USER_AGENT: &str = concat!("cdtest-fetcher/", env!("CARGO_PKG_VERSION"));

/// Transport-level failure of a single fetch.
///
/// Never crosses the [`FetchGreeting`] boundary; callers that need the
/// detail use [`HttpGreetingFetcher::try_fetch`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The HTTP client could not be constructed.
    #[error("client build failed: {detail}")]
    ClientBuild { detail: String },
    /// The request exceeded the policy timeout.
    #[error("request to {url} timed out: {detail}")]
    Timeout { url: String, detail: String },
    /// The endpoint could not be reached.
    #[error("connection to {url} failed: {detail}")]
    Connect { url: String, detail: String },
    /// Any other request failure (bad URL, TLS, redirect loop, ...).
    #[error("request to {url} failed: {detail}")]
    Request { url: String, detail: String },
}

impl FetchError {
    fn from_reqwest(url: &str, err: &reqwest::Error) -> Self {
        let url = url.to_string();
        let detail = err.to_string();
        if err.is_timeout() {
            Self::Timeout { url, detail }
        } else if err.is_connect() {
            Self::Connect { url, detail }
        } else {
            Self::Request { url, detail }
        }
    }
}

/// Greeting fetcher backed by a blocking `reqwest` client.
///
/// The client is built once; each [`fetch`](FetchGreeting::fetch) is an
/// independent request with no shared response state.
#[derive(Debug, Clone)]
pub struct HttpGreetingFetcher {
    client: Client,
    policy: FetchPolicy,
}

impl HttpGreetingFetcher {
    /// Build a fetcher for `policy`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::ClientBuild`] if the TLS backend or client
    /// configuration cannot be initialized.
    pub fn new(policy: FetchPolicy) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(policy.timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| FetchError::ClientBuild {
                detail: e.to_string(),
            })?;
        Ok(Self { client, policy })
    }

    /// The policy this fetcher was built with.
    #[must_use]
    pub fn policy(&self) -> FetchPolicy {
        self.policy
    }

    /// Perform the GET and return the raw status code.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Timeout`], [`FetchError::Connect`], or
    /// [`FetchError::Request`] when no response status was received.
    pub fn try_fetch(&self, url: &str) -> Result<u16, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| FetchError::from_reqwest(url, &e))?;
        Ok(response.status().as_u16())
    }
}

impl FetchGreeting for HttpGreetingFetcher {
    fn fetch(&self, endpoint: &str) -> Greeting {
        match self.try_fetch(endpoint) {
            Ok(status) => {
                debug!(endpoint, status, "greeting endpoint answered");
                Greeting::from_status(status)
            }
            Err(e) => {
                warn!(endpoint, error = %e, "greeting fetch failed");
                Greeting::Failure
            }
        }
    }
}

/// Fetch the greeting for `url` (or [`DEFAULT_ENDPOINT`]) with the harness
/// timeout and return the literal string.
///
/// Builds a fresh client per call. A client that cannot be built counts as
/// a failed fetch.
#[must_use]
pub fn fetch_greeting(url: Option<&str>) -> &'static str {
    let url = url.unwrap_or(DEFAULT_ENDPOINT);
    match HttpGreetingFetcher::new(FetchPolicy::harness()) {
        Ok(fetcher) => fetcher.fetch(url).as_str(),
        Err(e) => {
            warn!(error = %e, "greeting fetcher unavailable");
            Greeting::Failure.as_str()
        }
    }
}
