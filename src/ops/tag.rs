// src/ops/tag.rs

use crate::config::Settings;
use crate::errors::Result;
use crate::exec::Invocation;

use super::{require_repo_dir, vcs};

/// Create tag `name` locally, then push it to the configured remote.
pub fn invocations(settings: &Settings, name: &str) -> Result<Vec<Invocation>> {
    require_repo_dir(settings)?;
    Ok(vec![
        vcs(settings).args(["tag", name]),
        vcs(settings).args(["push", settings.file.deploy.remote.as_str(), name]),
    ])
}

pub fn success_message(name: &str) -> String {
    format!("tag created and pushed: {name}")
}
