//! cd-test fetcher: the two-branch greeting call at the bottom of the pipeline.
//!
//! One blocking HTTP GET against a caller-supplied URL, mapped to one of two
//! literal strings. Transport failures never escape this crate as errors on
//! the `FetchGreeting` path; they collapse into [`Greeting::Failure`].
//!
//! The crate also carries the standalone pipeline loop (fetch, print, sleep)
//! used for manual demo runs.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod contract;
pub mod greeting;
pub mod http;
pub mod pipeline;
pub mod policy;

pub use contract::FetchGreeting;
pub use greeting::{Greeting, DEFAULT_ENDPOINT, FAILURE_GREETING, SUCCESS_GREETING};
pub use http::{fetch_greeting, FetchError, HttpGreetingFetcher};
pub use policy::FetchPolicy;
