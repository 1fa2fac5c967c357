use std::path::{Path, PathBuf};

use godeploy::config::{DeployFile, EnvConfig, RawDeployFile, Settings};

/// Builder for `Settings` to simplify test setup.
pub struct SettingsBuilder {
    repo_name: String,
    repo_dir: PathBuf,
    gopath: PathBuf,
    file: RawDeployFile,
}

impl SettingsBuilder {
    /// Settings for the repository `api` at `repo_dir` with default tools.
    pub fn new(repo_dir: impl AsRef<Path>) -> Self {
        Self {
            repo_name: "api".to_string(),
            repo_dir: repo_dir.as_ref().to_path_buf(),
            gopath: PathBuf::from("/home/dev/go"),
            file: RawDeployFile::default(),
        }
    }

    pub fn repo_name(mut self, name: &str) -> Self {
        self.repo_name = name.to_string();
        self
    }

    pub fn gopath(mut self, path: impl AsRef<Path>) -> Self {
        self.gopath = path.as_ref().to_path_buf();
        self
    }

    pub fn remote(mut self, remote: &str) -> Self {
        self.file.deploy.remote = remote.to_string();
        self
    }

    pub fn branch(mut self, branch: &str) -> Self {
        self.file.deploy.branch = branch.to_string();
        self
    }

    pub fn build_tool(mut self, tool: &str) -> Self {
        self.file.tools.build = tool.to_string();
        self
    }

    pub fn vcs_tool(mut self, tool: &str) -> Self {
        self.file.tools.vcs = tool.to_string();
        self
    }

    pub fn build(self) -> Settings {
        let file =
            DeployFile::try_from(self.file).expect("Failed to build valid deploy file from builder");
        Settings::new(EnvConfig::new(self.repo_name, self.repo_dir, self.gopath), file)
    }
}
