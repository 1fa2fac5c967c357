// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{DeployFile, EnvConfig, RawDeployFile, Settings};
use crate::errors::Result;

/// File name looked up in `REP_DIR` when `--config` is not given.
pub const DEFAULT_DEPLOY_FILE: &str = "Deploy.toml";

/// Load a deploy file from a given path and return the raw `RawDeployFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawDeployFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let raw: RawDeployFile = toml::from_str(&contents)?;

    Ok(raw)
}

/// Load a deploy file from path and run validation.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<DeployFile> {
    let raw = load_from_path(&path)?;
    DeployFile::try_from(raw)
}

/// Default deploy file location for a repository.
pub fn default_config_path(repo_dir: &Path) -> PathBuf {
    repo_dir.join(DEFAULT_DEPLOY_FILE)
}

/// Combine the environment with the deploy file into `Settings`.
///
/// - An explicit `config_path` must exist and be valid.
/// - Otherwise `<REP_DIR>/Deploy.toml` is used if present.
/// - Otherwise the built-in defaults apply.
pub fn load_settings(env: EnvConfig, config_path: Option<&Path>) -> Result<Settings> {
    let file = match config_path {
        Some(path) => {
            debug!(path = %path.display(), "loading deploy file");
            load_and_validate(path)?
        }
        None => {
            let path = default_config_path(&env.repo_dir);
            if path.is_file() {
                debug!(path = %path.display(), "loading deploy file from repository");
                load_and_validate(&path)?
            } else {
                debug!("no deploy file; using defaults");
                DeployFile::default()
            }
        }
    };

    Ok(Settings::new(env, file))
}
