// src/workflow/sequencer.rs

use tracing::{error, info};

use crate::config::Settings;
use crate::errors::Result;
use crate::exec::{ProcessBackend, Runner};
use crate::ops::StepReport;

use super::Plan;

/// Runs a [`Plan`] one operation at a time.
///
/// The first failing operation ends the run and its error is returned;
/// nothing after it starts and nothing before it is rolled back.
pub struct Sequencer<'a, B: ProcessBackend> {
    settings: &'a Settings,
    runner: Runner<B>,
}

impl<'a, B: ProcessBackend> Sequencer<'a, B> {
    pub fn new(settings: &'a Settings, runner: Runner<B>) -> Self {
        Self { settings, runner }
    }

    /// Execute every step, calling `on_step` after each one succeeds.
    pub async fn execute<F>(&mut self, plan: &Plan, mut on_step: F) -> Result<Vec<StepReport>>
    where
        F: FnMut(&StepReport),
    {
        info!(steps = ?plan.kinds(), "workflow started");

        let mut reports = Vec::with_capacity(plan.steps().len());
        for op in plan.steps() {
            match op.run(self.settings, &mut self.runner).await {
                Ok(report) => {
                    info!(operation = %report.kind, "operation finished");
                    on_step(&report);
                    reports.push(report);
                }
                Err(err) => {
                    error!(operation = %op.kind(), "operation failed; stopping workflow");
                    return Err(err);
                }
            }
        }

        info!(completed = reports.len(), "workflow finished");
        Ok(reports)
    }
}
