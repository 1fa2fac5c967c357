// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{CommandFactory, Parser, ValueEnum};

use crate::workflow::Request;

/// Command-line arguments for `godeploy`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "godeploy",
    version,
    about = "Deployment helper for Go repositories: build, test, commit and tag.",
    long_about = "Deployment helper for Go repositories.\n\n\
        Requires GITHUB_REPO, REP_DIR and GOPATH in the environment. \
        Requested operations always run in the order build, test, commit, tag.",
    args_override_self = true
)]
pub struct CliArgs {
    /// Build the project into `$REP_DIR/bin/$GITHUB_REPO`.
    #[arg(long)]
    pub build: bool,

    /// Run unit tests (`go test ./...`).
    #[arg(long)]
    pub test: bool,

    /// Commit all changes with message MSG and push to the main branch.
    #[arg(long, short = 'c', value_name = "MSG")]
    pub commit: Option<String>,

    /// Create a git tag and push it.
    #[arg(long, short = 't', value_name = "TAG")]
    pub tag: Option<String>,

    /// Deploy file overriding remote, branch, bin dir and tool names.
    ///
    /// Default: `Deploy.toml` in `$REP_DIR`, if it exists.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Validate configuration and print the commands that would run.
    #[arg(long)]
    pub dry_run: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `GODEPLOY_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl CliArgs {
    /// Operations requested on the command line.
    ///
    /// Empty `--commit` / `--tag` values count as "not provided".
    pub fn request(&self) -> Request {
        Request {
            build: self.build,
            test: self.test,
            commit: non_empty(self.commit.as_deref()),
            tag: non_empty(self.tag.as_deref()),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty()).map(str::to_string)
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}

/// Print the usage text to stdout.
pub fn print_help() -> std::io::Result<()> {
    CliArgs::command().print_help()?;
    println!();
    Ok(())
}
