// src/ops/test_suite.rs

use crate::config::Settings;
use crate::errors::Result;
use crate::exec::Invocation;

use super::{require_repo_dir, toolchain};

/// `go test ./...` over every package in the repository.
pub fn invocations(settings: &Settings) -> Result<Vec<Invocation>> {
    require_repo_dir(settings)?;
    Ok(vec![toolchain(settings).args(["test", "./..."])])
}

pub fn success_message() -> String {
    "all tests passed".to_string()
}
