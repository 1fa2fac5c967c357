// src/errors.rs

//! Crate-wide error type and exit-code mapping.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeployError {
    #[error("environment variable not set: {}", .0.join(", "))]
    MissingEnv(Vec<String>),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("command failed ({}): {command}\n{stderr}", display_code(.code))]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("failed to start `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DeployError {
    /// Process exit status this error should terminate the program with.
    ///
    /// A failed command passes its own exit code through; everything else
    /// (including commands killed by a signal) exits with 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            DeployError::CommandFailed {
                code: Some(code), ..
            } => u8::try_from(*code).ok().filter(|c| *c != 0).unwrap_or(1),
            _ => 1,
        }
    }
}

fn display_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "signal".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, DeployError>;
