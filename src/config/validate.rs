// src/config/validate.rs

use std::path::Component;

use crate::config::model::{DeployFile, DeploySection, RawDeployFile, ToolsSection};
use crate::errors::{DeployError, Result};

impl TryFrom<RawDeployFile> for DeployFile {
    type Error = crate::errors::DeployError;

    fn try_from(raw: RawDeployFile) -> std::result::Result<Self, Self::Error> {
        validate_deploy_section(&raw.deploy)?;
        validate_tools_section(&raw.tools)?;
        Ok(DeployFile::new_unchecked(raw.deploy, raw.tools))
    }
}

fn validate_deploy_section(deploy: &DeploySection) -> Result<()> {
    ensure_word("[deploy].remote", &deploy.remote)?;
    ensure_word("[deploy].branch", &deploy.branch)?;

    let bin_dir = &deploy.bin_dir;
    if bin_dir.as_os_str().is_empty() {
        return Err(DeployError::ConfigError(
            "[deploy].bin_dir must not be empty".to_string(),
        ));
    }
    let escapes_repo = bin_dir.components().any(|c| {
        matches!(
            c,
            Component::RootDir | Component::Prefix(_) | Component::ParentDir
        )
    });
    if escapes_repo {
        return Err(DeployError::ConfigError(format!(
            "[deploy].bin_dir must be a relative path inside REP_DIR (got {:?})",
            bin_dir
        )));
    }
    Ok(())
}

fn validate_tools_section(tools: &ToolsSection) -> Result<()> {
    ensure_word("[tools].build", &tools.build)?;
    ensure_word("[tools].vcs", &tools.vcs)?;
    Ok(())
}

/// Non-empty and free of whitespace, since the value becomes a single argv entry.
fn ensure_word(key: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(DeployError::ConfigError(format!("{key} must not be empty")));
    }
    if value.chars().any(char::is_whitespace) {
        return Err(DeployError::ConfigError(format!(
            "{key} must not contain whitespace (got {value:?})"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml_src: &str) -> Result<DeployFile> {
        let raw: RawDeployFile = toml::from_str(toml_src)?;
        DeployFile::try_from(raw)
    }

    #[test]
    fn empty_file_gives_defaults() {
        let file = parse("").unwrap();
        assert_eq!(file, DeployFile::default());
        assert_eq!(file.deploy.remote, "origin");
        assert_eq!(file.deploy.branch, "main");
        assert_eq!(file.tools.build, "go");
        assert_eq!(file.tools.vcs, "git");
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let file = parse("[deploy]\nbranch = \"release\"\n").unwrap();
        assert_eq!(file.deploy.branch, "release");
        assert_eq!(file.deploy.remote, "origin");
    }

    #[test]
    fn rejects_blank_branch() {
        let err = parse("[deploy]\nbranch = \"\"\n").unwrap_err();
        assert!(matches!(err, DeployError::ConfigError(ref m) if m.contains("branch")));
    }

    #[test]
    fn rejects_bin_dir_outside_repository() {
        for bad in ["/usr/local/bin", "../bin"] {
            let src = format!("[deploy]\nbin_dir = {bad:?}\n");
            let err = parse(&src).unwrap_err();
            assert!(
                matches!(err, DeployError::ConfigError(ref m) if m.contains("bin_dir")),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_tool_with_arguments() {
        let err = parse("[tools]\nbuild = \"go1.22 build\"\n").unwrap_err();
        assert!(matches!(err, DeployError::ConfigError(ref m) if m.contains("[tools].build")));
    }

    #[test]
    fn unknown_keys_are_toml_errors() {
        let err = parse("[deploy]\nremtoe = \"upstream\"\n").unwrap_err();
        assert!(matches!(err, DeployError::TomlError(_)));
    }
}
