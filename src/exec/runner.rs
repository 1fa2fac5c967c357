// src/exec/runner.rs

use std::path::PathBuf;

use tracing::{error, info, warn};

use crate::errors::{DeployError, Result};

use super::{Invocation, ProcessBackend};

/// Runs invocations through a [`ProcessBackend`] and enforces the success
/// contract:
///
/// - exit code 0: return stdout with trailing whitespace trimmed;
/// - non-zero and `check`: `DeployError::CommandFailed` carrying the exit
///   code and captured stderr;
/// - non-zero and not `check`: return stdout anyway.
pub struct Runner<B: ProcessBackend> {
    backend: B,
}

impl<B: ProcessBackend> Runner<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub async fn run(&mut self, invocation: &Invocation) -> Result<String> {
        let cwd = invocation
            .cwd
            .clone()
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."));
        info!(
            command = %invocation.command_line(),
            cwd = %cwd.display(),
            "running command"
        );

        let output = self.backend.execute(invocation).await?;

        if !output.success() {
            if invocation.check {
                error!(
                    command = %invocation.command_line(),
                    exit_code = ?output.code,
                    "command failed"
                );
                return Err(DeployError::CommandFailed {
                    command: invocation.command_line(),
                    code: output.code,
                    stderr: output.stderr,
                });
            }
            warn!(
                command = %invocation.command_line(),
                exit_code = ?output.code,
                "unchecked command exited non-zero"
            );
        }

        Ok(output.stdout.trim_end().to_string())
    }
}
