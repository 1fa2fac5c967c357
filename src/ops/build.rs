// src/ops/build.rs

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use tracing::debug;

use crate::config::{Settings, ENV_REPO_NAME};
use crate::errors::{DeployError, Result};
use crate::exec::Invocation;

use super::{require_build_workspace, toolchain};

/// `<REP_DIR>/<bin_dir>/<repository name>`.
pub fn output_path(settings: &Settings) -> Result<PathBuf> {
    let name = settings.env.output_name().ok_or_else(|| {
        DeployError::ConfigError(format!(
            "cannot name the build output: {ENV_REPO_NAME} is empty and {:?} has no final path segment",
            settings.repo_dir()
        ))
    })?;
    Ok(settings.bin_dir().join(name))
}

/// Create the output directory if it does not exist yet.
pub fn ensure_bin_dir(settings: &Settings) -> Result<PathBuf> {
    let dir = settings.bin_dir();
    fs::create_dir_all(&dir).with_context(|| format!("creating output directory {:?}", dir))?;
    debug!(dir = %dir.display(), "output directory ready");
    Ok(dir)
}

pub fn invocations(settings: &Settings) -> Result<Vec<Invocation>> {
    require_build_workspace(settings)?;
    let output = output_path(settings)?;
    Ok(vec![
        toolchain(settings)
            .args(["build", "-o"])
            .arg(output.to_string_lossy())
            .arg("."),
    ])
}

pub fn success_message(settings: &Settings) -> Result<String> {
    Ok(format!("build finished: {}", output_path(settings)?.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DeployFile, EnvConfig};

    fn settings() -> Settings {
        Settings::new(
            EnvConfig::new("api", "/src/api", "/home/dev/go"),
            DeployFile::default(),
        )
    }

    #[test]
    fn builds_into_bin_named_after_repository() {
        let inv = invocations(&settings()).unwrap();
        assert_eq!(inv.len(), 1);
        assert_eq!(inv[0].argv(), vec!["go", "build", "-o", "/src/api/bin/api", "."]);
        assert_eq!(inv[0].cwd, Some(PathBuf::from("/src/api")));
        assert_eq!(
            inv[0].envs,
            vec![("GOPATH".to_string(), "/home/dev/go".to_string())]
        );
    }

    #[test]
    fn missing_workspace_is_a_precondition_failure() {
        let s = Settings::new(EnvConfig::new("api", "/src/api", ""), DeployFile::default());
        assert!(matches!(invocations(&s), Err(DeployError::ConfigError(_))));
    }
}
