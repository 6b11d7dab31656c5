//! The two literal outcomes of a greeting fetch.

/// Endpoint used when the caller does not supply one.
pub const DEFAULT_ENDPOINT: &str = "https://api.github.com";

/// Returned when the endpoint answers with exactly HTTP 200.
pub const SUCCESS_GREETING: &str = "Hello, CI/CD Pipeline!";

/// Returned for any other status and for every transport failure.
pub const FAILURE_GREETING: &str = "Failed to fetch greeting";

/// Outcome of one greeting fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Greeting {
    /// The endpoint answered 200.
    Success,
    /// Non-200 status, timeout, or connection failure.
    Failure,
}

impl Greeting {
    /// Map an HTTP status code. Only 200 counts; other 2xx codes do not.
    #[must_use]
    pub fn from_status(status: u16) -> Self {
        if status == 200 {
            Self::Success
        } else {
            Self::Failure
        }
    }

    /// The literal string for this outcome.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => SUCCESS_GREETING,
            Self::Failure => FAILURE_GREETING,
        }
    }

    #[must_use]
    pub fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

impl std::fmt::Display for Greeting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
