// src/exec/backend.rs

//! Pluggable process backend abstraction.
//!
//! The [`Runner`](super::Runner) talks to a `ProcessBackend` instead of
//! spawning processes itself. This makes it easy to swap in a fake backend in
//! tests while keeping the production implementation here.
//!
//! - `RealProcessBackend` is the implementation used by `godeploy`. It spawns
//!   the program with `tokio::process::Command` and waits for it to exit.
//! - Tests can provide their own `ProcessBackend` that, for example, records
//!   invocations and returns scripted exit codes.

use std::future::Future;
use std::pin::Pin;
use std::process::Stdio;

use tokio::process::Command;
use tracing::debug;

use crate::errors::{DeployError, Result};

use super::Invocation;

/// Captured result of one finished process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// `None` when the process was terminated by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Trait abstracting how a single invocation is executed.
///
/// Production code uses [`RealProcessBackend`]; tests can provide their own
/// implementation that doesn't spawn real processes.
pub trait ProcessBackend: Send {
    /// Run `invocation` to completion and return its captured output.
    ///
    /// A non-zero exit is *not* an error at this level; only failing to
    /// start or wait for the process is.
    fn execute<'a>(
        &'a mut self,
        invocation: &'a Invocation,
    ) -> Pin<Box<dyn Future<Output = Result<ProcessOutput>> + Send + 'a>>;
}

/// Real process backend used in production.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealProcessBackend;

impl RealProcessBackend {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessBackend for RealProcessBackend {
    fn execute<'a>(
        &'a mut self,
        invocation: &'a Invocation,
    ) -> Pin<Box<dyn Future<Output = Result<ProcessOutput>> + Send + 'a>> {
        Box::pin(async move {
            let mut cmd = Command::new(&invocation.program);
            cmd.args(&invocation.args)
                .envs(invocation.envs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
                .stdin(Stdio::null())
                .stdout(Stdio::piped())
                .stderr(Stdio::piped())
                .kill_on_drop(true);

            if let Some(dir) = &invocation.cwd {
                cmd.current_dir(dir);
            }

            let output = cmd.output().await.map_err(|source| DeployError::Spawn {
                command: invocation.command_line(),
                source,
            })?;

            let result = ProcessOutput {
                code: output.status.code(),
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            };

            debug!(
                command = %invocation.command_line(),
                exit_code = ?result.code,
                stdout_bytes = output.stdout.len(),
                stderr_bytes = output.stderr.len(),
                "process exited"
            );

            Ok(result)
        })
    }
}
