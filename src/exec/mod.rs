// src/exec/mod.rs

//! Process execution layer.
//!
//! This module is responsible for actually running the external tools, using
//! `tokio::process::Command`, and for turning their exit status into the
//! crate's success contract.
//!
//! - [`invocation`] describes one process call (argv, cwd, env, check flag).
//! - [`backend`] provides the `ProcessBackend` trait and the concrete
//!   `RealProcessBackend` used in production, which tests can replace with a
//!   fake implementation.
//! - [`runner`] wraps a backend, logs each command and enforces the success
//!   contract.

pub mod backend;
pub mod invocation;
pub mod runner;

pub use backend::{ProcessBackend, ProcessOutput, RealProcessBackend};
pub use invocation::Invocation;
pub use runner::Runner;
