// tests/real_process.rs
//
// Exercises `RealProcessBackend` against `sh`.
#![cfg(unix)]

use std::error::Error;

use godeploy::errors::DeployError;
use godeploy::exec::{Invocation, RealProcessBackend, Runner};
use godeploy_test_utils::{init_tracing, with_timeout};
use tempfile::TempDir;

type TestResult = Result<(), Box<dyn Error>>;

fn sh(script: &str) -> Invocation {
    Invocation::new("sh").args(["-c", script])
}

#[tokio::test]
async fn captures_trimmed_stdout() -> TestResult {
    init_tracing();
    let mut runner = Runner::new(RealProcessBackend::new());
    let out = with_timeout(runner.run(&sh("printf 'hello\\n\\n'"))).await?;
    assert_eq!(out, "hello");
    Ok(())
}

#[tokio::test]
async fn non_zero_exit_is_command_failed_with_stderr() -> TestResult {
    init_tracing();
    let mut runner = Runner::new(RealProcessBackend::new());
    let err = with_timeout(runner.run(&sh("echo broken >&2; exit 2")))
        .await
        .unwrap_err();

    match err {
        DeployError::CommandFailed { code, stderr, .. } => {
            assert_eq!(code, Some(2));
            assert_eq!(stderr.trim_end(), "broken");
        }
        other => panic!("expected CommandFailed, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn unchecked_invocation_returns_output_despite_failure() -> TestResult {
    let mut runner = Runner::new(RealProcessBackend::new());
    let out = runner.run(&sh("echo partial; exit 3").unchecked()).await?;
    assert_eq!(out, "partial");
    Ok(())
}

#[tokio::test]
async fn runs_in_working_directory_with_extra_env() -> TestResult {
    let dir = TempDir::new()?;
    let mut runner = Runner::new(RealProcessBackend::new());

    let inv = sh("pwd -P; echo \"$GOPATH\"")
        .current_dir(dir.path())
        .env("GOPATH", "/opt/go");
    let out = runner.run(&inv).await?;

    let mut lines = out.lines();
    let expected_dir = dir.path().canonicalize()?;
    assert_eq!(lines.next().map(std::path::PathBuf::from), Some(expected_dir));
    assert_eq!(lines.next(), Some("/opt/go"));
    Ok(())
}

#[tokio::test]
async fn missing_program_is_a_spawn_error() {
    let mut runner = Runner::new(RealProcessBackend::new());
    let err = runner
        .run(&Invocation::new("godeploy-no-such-tool-3f9a").arg("build"))
        .await
        .unwrap_err();

    assert!(matches!(err, DeployError::Spawn { .. }));
    assert_eq!(err.exit_code(), 1);
}
