// src/ops/mod.rs

//! The four deployment operations.
//!
//! Each operation is described by the invocations it needs ([`Operation::invocations`]),
//! an optional local preparation step, and a success report. Running an
//! operation executes its invocations strictly in order through a
//! [`Runner`]; the first failure aborts the rest.

pub mod build;
pub mod commit;
pub mod tag;
pub mod test_suite;

use tracing::info;

use crate::config::{Settings, ENV_BUILD_WORKSPACE, ENV_REPO_DIR};
use crate::errors::{DeployError, Result};
use crate::exec::{Invocation, ProcessBackend, Runner};
use crate::types::OperationKind;

/// A requested operation with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Build,
    Test,
    Commit { message: String },
    Tag { name: String },
}

/// Outcome of one completed operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    pub kind: OperationKind,
    pub message: String,
}

impl Operation {
    /// Commit-and-push with `message`. A blank message is rejected.
    pub fn commit(message: impl Into<String>) -> Result<Self> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(DeployError::ConfigError(
                "commit message must not be empty".to_string(),
            ));
        }
        Ok(Operation::Commit { message })
    }

    /// Tag-and-push with tag `name`. A blank name is rejected.
    pub fn tag(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DeployError::ConfigError(
                "tag name must not be empty".to_string(),
            ));
        }
        Ok(Operation::Tag { name })
    }

    pub fn kind(&self) -> OperationKind {
        match self {
            Operation::Build => OperationKind::Build,
            Operation::Test => OperationKind::Test,
            Operation::Commit { .. } => OperationKind::Commit,
            Operation::Tag { .. } => OperationKind::Tag,
        }
    }

    /// External commands this operation runs, in order.
    pub fn invocations(&self, settings: &Settings) -> Result<Vec<Invocation>> {
        match self {
            Operation::Build => build::invocations(settings),
            Operation::Test => test_suite::invocations(settings),
            Operation::Commit { message } => commit::invocations(settings, message),
            Operation::Tag { name } => tag::invocations(settings, name),
        }
    }

    /// Local filesystem work done before the first invocation.
    pub fn prepare(&self, settings: &Settings) -> Result<()> {
        match self {
            Operation::Build => build::ensure_bin_dir(settings).map(|_| ()),
            _ => Ok(()),
        }
    }

    fn success_message(&self, settings: &Settings) -> Result<String> {
        Ok(match self {
            Operation::Build => build::success_message(settings)?,
            Operation::Test => test_suite::success_message(),
            Operation::Commit { message } => commit::success_message(settings, message),
            Operation::Tag { name } => tag::success_message(name),
        })
    }

    /// Prepare, then run every invocation through `runner`.
    pub async fn run<B: ProcessBackend>(
        &self,
        settings: &Settings,
        runner: &mut Runner<B>,
    ) -> Result<StepReport> {
        let invocations = self.invocations(settings)?;
        self.prepare(settings)?;

        info!(operation = %self.kind(), steps = invocations.len(), "starting operation");
        for invocation in &invocations {
            runner.run(invocation).await?;
        }

        Ok(StepReport {
            kind: self.kind(),
            message: self.success_message(settings)?,
        })
    }
}

/// Precondition shared by every operation.
pub(crate) fn require_repo_dir(settings: &Settings) -> Result<()> {
    if settings.repo_dir().as_os_str().is_empty() {
        return Err(DeployError::ConfigError(format!(
            "the {ENV_REPO_DIR} environment variable must be set"
        )));
    }
    Ok(())
}

/// Precondition for operations that invoke the build toolchain.
pub(crate) fn require_build_workspace(settings: &Settings) -> Result<()> {
    if settings.env.build_workspace.as_os_str().is_empty() {
        return Err(DeployError::ConfigError(format!(
            "the {ENV_BUILD_WORKSPACE} and {ENV_REPO_DIR} environment variables must be set"
        )));
    }
    require_repo_dir(settings)
}

/// Invocation of the build toolchain inside the repository, with `GOPATH`.
pub(crate) fn toolchain(settings: &Settings) -> Invocation {
    Invocation::new(&settings.file.tools.build)
        .current_dir(settings.repo_dir())
        .env(
            ENV_BUILD_WORKSPACE,
            settings.env.build_workspace.to_string_lossy(),
        )
}

/// Invocation of the version-control tool inside the repository.
pub(crate) fn vcs(settings: &Settings) -> Invocation {
    Invocation::new(&settings.file.tools.vcs).current_dir(settings.repo_dir())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_commit_message_is_rejected() {
        assert!(Operation::commit("  ").is_err());
        assert_eq!(
            Operation::commit("ship it").unwrap(),
            Operation::Commit {
                message: "ship it".to_string()
            }
        );
    }

    #[test]
    fn blank_tag_is_rejected() {
        assert!(Operation::tag("").is_err());
        assert_eq!(Operation::tag("v1").unwrap().kind(), OperationKind::Tag);
    }
}
