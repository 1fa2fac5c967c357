// src/config/mod.rs

//! Configuration for godeploy.
//!
//! Responsibilities:
//! - Read the required environment (`env.rs`).
//! - Define the optional `Deploy.toml` data model (`model.rs`).
//! - Load a deploy file from disk (`loader.rs`).
//! - Validate it before any operation runs (`validate.rs`).

pub mod env;
pub mod loader;
pub mod model;
pub mod validate;

pub use env::{env_from_lookup, env_from_process};
pub use loader::{load_and_validate, load_from_path, load_settings};
pub use model::{
    DeployFile, DeploySection, EnvConfig, RawDeployFile, Settings, ToolsSection,
    ENV_BUILD_WORKSPACE, ENV_REPO_DIR, ENV_REPO_NAME, REQUIRED_ENV,
};
