// src/config/env.rs

use tracing::debug;

use crate::config::model::{
    EnvConfig, ENV_BUILD_WORKSPACE, ENV_REPO_DIR, ENV_REPO_NAME, REQUIRED_ENV,
};
use crate::errors::{DeployError, Result};

/// Read the environment configuration from the running process.
pub fn env_from_process() -> Result<EnvConfig> {
    env_from_lookup(|name| std::env::var(name).ok())
}

/// Read the environment configuration through `lookup`.
///
/// Unset and blank variables both count as missing; every missing name is
/// reported in a single `DeployError::MissingEnv`.
pub fn env_from_lookup<F>(lookup: F) -> Result<EnvConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let read = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

    let missing: Vec<String> = REQUIRED_ENV
        .iter()
        .copied()
        .filter(|name| read(name).is_none())
        .map(|name| name.to_string())
        .collect();

    if !missing.is_empty() {
        return Err(DeployError::MissingEnv(missing));
    }

    let env = EnvConfig::new(
        read(ENV_REPO_NAME).unwrap_or_default(),
        read(ENV_REPO_DIR).unwrap_or_default(),
        read(ENV_BUILD_WORKSPACE).unwrap_or_default(),
    );
    debug!(
        repo_name = %env.repo_name,
        repo_dir = %env.repo_dir.display(),
        build_workspace = %env.build_workspace.display(),
        "environment configuration loaded"
    );
    Ok(env)
}
