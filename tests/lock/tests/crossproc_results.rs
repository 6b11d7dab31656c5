//! Cross-process lock test for the automated run.
//!
//! Spawns the `fixture_run` binary under several environment variants and
//! asserts identical output and exit status. Proves that scoring and fixture
//! digests do not depend on cwd, locale, or timezone.

use std::path::Path;
use std::process::{Command, Output};

use cdtest_fetcher::{FAILURE_GREETING, SUCCESS_GREETING};
use lock_tests::project::write_fixtures;
use lock_tests::stub_server::{Route, StubServer};

/// Resolve the path to the compiled `fixture_run` binary.
///
/// `cargo test` puts test binaries in `target/debug/deps/`; package
/// binaries live one directory up.
fn binary_path() -> String {
    let mut path = std::env::current_exe()
        .expect("can resolve test binary path")
        .parent()
        .expect("binary dir exists")
        .parent()
        .expect("deps parent exists")
        .to_path_buf();
    path.push("fixture_run");
    path.to_string_lossy().to_string()
}

fn run_variant(root: &Path, work_dir: &Path, env_overrides: &[(&str, &str)]) -> Output {
    let bin = binary_path();
    let mut command = Command::new(&bin);
    command
        .arg(root)
        .current_dir(work_dir)
        .env_remove("LC_ALL")
        .env_remove("LANG")
        .env_remove("TZ")
        .env_remove("RUST_LOG");
    for &(key, val) in env_overrides {
        command.env(key, val);
    }
    command
        .output()
        .unwrap_or_else(|e| panic!("failed to spawn {bin}: {e}"))
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout is valid UTF-8")
}

#[test]
fn crossproc_identical_across_env_variants() {
    let server = StubServer::start(&[("/ok", Route::Status(200)), ("/err", Route::Status(500))]);
    let ok = server.url("/ok");
    let err = server.url("/err");
    let project = tempfile::tempdir().unwrap();
    write_fixtures(
        project.path(),
        &[(1, ok.as_str(), "ok"), (2, err.as_str(), "err")],
        &[(1, SUCCESS_GREETING), (2, FAILURE_GREETING)],
    );
    let elsewhere = tempfile::tempdir().unwrap();

    let baseline = run_variant(project.path(), project.path(), &[]);
    let relocated = run_variant(project.path(), elsewhere.path(), &[]);
    let localized = run_variant(
        project.path(),
        project.path(),
        &[("LANG", "de_DE.UTF-8"), ("TZ", "Asia/Tokyo")],
    );

    assert!(baseline.status.success(), "stderr={}", String::from_utf8_lossy(&baseline.stderr));
    assert_eq!(stdout(&baseline), stdout(&relocated), "cwd must not matter");
    assert_eq!(stdout(&baseline), stdout(&localized), "locale/tz must not matter");

    let text = stdout(&baseline);
    assert!(text.contains("exit_status=0\n"), "got {text}");
    assert!(text.contains("binary_results=1,1\n"), "got {text}");
    assert!(text.contains("detailed_count=2\n"), "got {text}");
}

#[test]
fn crossproc_failure_exits_one() {
    let server = StubServer::start(&[("/err", Route::Status(503))]);
    let err = server.url("/err");
    let project = tempfile::tempdir().unwrap();
    write_fixtures(project.path(), &[(1, err.as_str(), "down")], &[(1, SUCCESS_GREETING)]);

    let output = run_variant(project.path(), project.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("binary_results=0\n"));
}
