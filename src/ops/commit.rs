// src/ops/commit.rs

use crate::config::Settings;
use crate::errors::Result;
use crate::exec::Invocation;

use super::{require_repo_dir, vcs};

/// Stage everything, commit with `message`, push to the configured branch.
pub fn invocations(settings: &Settings, message: &str) -> Result<Vec<Invocation>> {
    require_repo_dir(settings)?;
    let deploy = &settings.file.deploy;
    Ok(vec![
        vcs(settings).args(["add", "."]),
        vcs(settings).args(["commit", "-m", message]),
        vcs(settings).args(["push", deploy.remote.as_str(), deploy.branch.as_str()]),
    ])
}

pub fn success_message(settings: &Settings, message: &str) -> String {
    format!(
        "committed and pushed to {}/{}: \"{}\"",
        settings.file.deploy.remote, settings.file.deploy.branch, message
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DeployFile, EnvConfig};

    #[test]
    fn stages_commits_then_pushes_main() {
        let settings = Settings::new(EnvConfig::new("api", "/src/api", "/go"), DeployFile::default());
        let lines: Vec<String> = invocations(&settings, "release notes")
            .unwrap()
            .iter()
            .map(Invocation::command_line)
            .collect();
        assert_eq!(
            lines,
            vec![
                "git add .",
                "git commit -m release notes",
                "git push origin main",
            ]
        );
    }

    #[test]
    fn message_stays_a_single_argument() {
        let settings = Settings::new(EnvConfig::new("api", "/src/api", "/go"), DeployFile::default());
        let inv = invocations(&settings, "fix: handle \"quotes\" and spaces").unwrap();
        assert_eq!(inv[1].args, vec!["commit", "-m", "fix: handle \"quotes\" and spaces"]);
    }
}
