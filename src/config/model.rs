// src/config/model.rs

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Repository name; names the build output.
pub const ENV_REPO_NAME: &str = "GITHUB_REPO";
/// Absolute path to the working repository.
pub const ENV_REPO_DIR: &str = "REP_DIR";
/// Go workspace path, exported to the toolchain as `GOPATH`.
pub const ENV_BUILD_WORKSPACE: &str = "GOPATH";

/// All variables that must be present before any operation runs.
pub const REQUIRED_ENV: [&str; 3] = [ENV_REPO_NAME, ENV_REPO_DIR, ENV_BUILD_WORKSPACE];

/// Environment configuration, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvConfig {
    pub repo_name: String,
    pub repo_dir: PathBuf,
    pub build_workspace: PathBuf,
}

impl EnvConfig {
    pub fn new(
        repo_name: impl Into<String>,
        repo_dir: impl Into<PathBuf>,
        build_workspace: impl Into<PathBuf>,
    ) -> Self {
        Self {
            repo_name: repo_name.into(),
            repo_dir: repo_dir.into(),
            build_workspace: build_workspace.into(),
        }
    }

    /// Name of the build output.
    ///
    /// Falls back to the last segment of `repo_dir` when `repo_name` is
    /// blank. Returns `None` if neither yields a name (e.g. `repo_dir = "/"`).
    pub fn output_name(&self) -> Option<String> {
        let name = self.repo_name.trim();
        if !name.is_empty() {
            return Some(name.to_string());
        }
        self.repo_dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .filter(|n| !n.is_empty())
    }
}

/// Deploy file as read from TOML.
///
/// ```toml
/// [deploy]
/// remote = "origin"
/// branch = "main"
/// bin_dir = "bin"
///
/// [tools]
/// build = "go"
/// vcs = "git"
/// ```
///
/// All sections and keys are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawDeployFile {
    #[serde(default)]
    pub deploy: DeploySection,

    #[serde(default)]
    pub tools: ToolsSection,
}

/// `[deploy]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeploySection {
    /// Remote that commits and tags are pushed to.
    #[serde(default = "default_remote")]
    pub remote: String,

    /// Branch that `--commit` pushes to.
    #[serde(default = "default_branch")]
    pub branch: String,

    /// Output directory for the binary, relative to `REP_DIR`.
    #[serde(default = "default_bin_dir")]
    pub bin_dir: PathBuf,
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_branch() -> String {
    "main".to_string()
}

fn default_bin_dir() -> PathBuf {
    PathBuf::from("bin")
}

impl Default for DeploySection {
    fn default() -> Self {
        Self {
            remote: default_remote(),
            branch: default_branch(),
            bin_dir: default_bin_dir(),
        }
    }
}

/// `[tools]` section: executables looked up on `PATH`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolsSection {
    #[serde(default = "default_build_tool")]
    pub build: String,

    #[serde(default = "default_vcs_tool")]
    pub vcs: String,
}

fn default_build_tool() -> String {
    "go".to_string()
}

fn default_vcs_tool() -> String {
    "git".to_string()
}

impl Default for ToolsSection {
    fn default() -> Self {
        Self {
            build: default_build_tool(),
            vcs: default_vcs_tool(),
        }
    }
}

/// Validated deploy file. Build one through `TryFrom<RawDeployFile>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeployFile {
    pub deploy: DeploySection,
    pub tools: ToolsSection,
}

impl DeployFile {
    pub(crate) fn new_unchecked(deploy: DeploySection, tools: ToolsSection) -> Self {
        Self { deploy, tools }
    }
}

/// Everything an operation needs, validated up front and passed by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub env: EnvConfig,
    pub file: DeployFile,
}

impl Settings {
    pub fn new(env: EnvConfig, file: DeployFile) -> Self {
        Self { env, file }
    }

    pub fn repo_dir(&self) -> &Path {
        &self.env.repo_dir
    }

    /// `<REP_DIR>/<bin_dir>`.
    pub fn bin_dir(&self) -> PathBuf {
        self.env.repo_dir.join(&self.file.deploy.bin_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_name_prefers_repo_name() {
        let env = EnvConfig::new("api", "/src/service", "/go");
        assert_eq!(env.output_name().as_deref(), Some("api"));
    }

    #[test]
    fn output_name_falls_back_to_repo_dir_segment() {
        let env = EnvConfig::new("  ", "/src/service", "/go");
        assert_eq!(env.output_name().as_deref(), Some("service"));

        let root = EnvConfig::new("", "/", "/go");
        assert_eq!(root.output_name(), None);
    }

    #[test]
    fn bin_dir_is_under_repo_dir() {
        let settings = Settings::new(
            EnvConfig::new("api", "/src/service", "/go"),
            DeployFile::default(),
        );
        assert_eq!(settings.bin_dir(), PathBuf::from("/src/service/bin"));
    }
}
