// src/workflow/mod.rs

//! Fixed-order dispatch of the requested operations.
//!
//! - [`plan`] turns a [`Request`] into an ordered [`Plan`].
//! - [`sequencer`] runs a plan step by step and stops at the first failure.

pub mod plan;
pub mod sequencer;

pub use plan::{Plan, Request};
pub use sequencer::Sequencer;
