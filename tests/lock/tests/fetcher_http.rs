//! Lock tests for the HTTP greeting fetcher against a local stub server.
//!
//! Proves that:
//! - exactly HTTP 200 yields the success string
//! - every other status yields the failure string
//! - timeouts and refused connections yield the failure string
//! - one call is one request (no retries)

use std::time::Duration;

use cdtest_fetcher::{
    fetch_greeting, FetchError, FetchGreeting, FetchPolicy, Greeting, HttpGreetingFetcher,
    FAILURE_GREETING, SUCCESS_GREETING,
};
use lock_tests::stub_server::{closed_url, Route, StubServer};

fn fetcher() -> HttpGreetingFetcher {
    HttpGreetingFetcher::new(FetchPolicy::harness()).expect("client builds")
}

// ---------------------------------------------------------------------------
// Status mapping
// ---------------------------------------------------------------------------

#[test]
fn status_200_returns_success_string() {
    let server = StubServer::start(&[("/", Route::Status(200))]);
    let greeting = fetcher().fetch(&server.url("/"));
    assert_eq!(greeting, Greeting::Success);
    assert_eq!(greeting.as_str(), SUCCESS_GREETING);
}

#[test]
fn success_is_stable_across_repeated_calls() {
    let server = StubServer::start(&[("/", Route::Status(200))]);
    let f = fetcher();
    for _ in 0..5 {
        assert_eq!(f.fetch(&server.url("/")), Greeting::Success);
    }
    assert_eq!(server.hits(), 5);
}

#[test]
fn non_200_statuses_return_failure_string() {
    let server = StubServer::start(&[
        ("/no-content", Route::Status(204)),
        ("/forbidden", Route::Status(403)),
        ("/error", Route::Status(500)),
        ("/unavailable", Route::Status(503)),
    ]);
    let f = fetcher();
    for path in ["/no-content", "/forbidden", "/error", "/unavailable", "/unrouted"] {
        assert_eq!(
            f.fetch(&server.url(path)).as_str(),
            FAILURE_GREETING,
            "path {path}"
        );
    }
}

#[test]
fn try_fetch_reports_raw_status() {
    let server = StubServer::start(&[("/created", Route::Status(201))]);
    assert_eq!(fetcher().try_fetch(&server.url("/created")), Ok(201));
    assert_eq!(fetcher().try_fetch(&server.url("/missing")), Ok(404));
}

#[test]
fn redirect_to_200_is_followed() {
    let server = StubServer::start(&[
        ("/old", Route::Redirect("/new".into())),
        ("/new", Route::Status(200)),
    ]);
    assert_eq!(fetcher().fetch(&server.url("/old")), Greeting::Success);
}

// ---------------------------------------------------------------------------
// Transport failures
// ---------------------------------------------------------------------------

#[test]
fn timeout_returns_failure_string() {
    let server = StubServer::start(&[("/slow", Route::Delayed(200, Duration::from_secs(3)))]);
    let f = HttpGreetingFetcher::new(FetchPolicy::with_timeout(Duration::from_millis(300)))
        .expect("client builds");

    assert_eq!(f.fetch(&server.url("/slow")), Greeting::Failure);
    match f.try_fetch(&server.url("/slow")) {
        Err(FetchError::Timeout { .. }) => {}
        other => panic!("expected Timeout, got {other:?}"),
    }
}

#[test]
fn refused_connection_returns_failure_string() {
    assert_eq!(fetcher().fetch(&closed_url()), Greeting::Failure);
}

// ---------------------------------------------------------------------------
// No retries
// ---------------------------------------------------------------------------

#[test]
fn server_error_is_not_retried() {
    let server = StubServer::start(&[("/error", Route::Status(500))]);
    assert_eq!(fetcher().fetch(&server.url("/error")), Greeting::Failure);
    assert_eq!(server.hits(), 1, "one fetch must be exactly one request");
}

// ---------------------------------------------------------------------------
// Convenience entry point
// ---------------------------------------------------------------------------

#[test]
fn fetch_greeting_uses_supplied_url() {
    let server = StubServer::start(&[("/", Route::Status(200)), ("/down", Route::Status(502))]);
    assert_eq!(fetch_greeting(Some(&server.url("/"))), SUCCESS_GREETING);
    assert_eq!(fetch_greeting(Some(&server.url("/down"))), FAILURE_GREETING);
}
