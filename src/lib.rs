// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod ops;
pub mod types;
pub mod workflow;

use tracing::debug;

use crate::cli::CliArgs;
use crate::config::{env_from_process, load_settings, Settings};
use crate::errors::Result;
use crate::exec::{ProcessBackend, RealProcessBackend, Runner};
use crate::ops::StepReport;
use crate::workflow::{Plan, Sequencer};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - environment + deploy file loading (validated before anything runs)
/// - the fixed-order plan
/// - the sequencer, backed by real processes
pub async fn run(args: CliArgs) -> Result<()> {
    let request = args.request();

    let env = env_from_process()?;
    let settings = load_settings(env, args.config.as_deref())?;
    let plan = Plan::from_request(&request)?;

    if args.dry_run {
        print_dry_run(&plan, &settings)?;
        return Ok(());
    }

    run_plan(&plan, &settings, RealProcessBackend::new()).await?;
    Ok(())
}

/// Execute `plan` against `backend`, printing each step's report to stdout.
pub async fn run_plan<B: ProcessBackend>(
    plan: &Plan,
    settings: &Settings,
    backend: B,
) -> Result<Vec<StepReport>> {
    let mut sequencer = Sequencer::new(settings, Runner::new(backend));
    sequencer
        .execute(plan, |report| println!("[OK] {}", report.message))
        .await
}

/// Dry-run output: print the settings and every command, run nothing.
fn print_dry_run(plan: &Plan, settings: &Settings) -> Result<()> {
    println!("godeploy dry-run");
    println!("  repository = {}", settings.env.repo_name);
    println!("  repo_dir   = {}", settings.repo_dir().display());
    println!("  gopath     = {}", settings.env.build_workspace.display());
    println!(
        "  remote     = {} (branch {})",
        settings.file.deploy.remote, settings.file.deploy.branch
    );
    println!();

    println!("steps ({}):", plan.steps().len());
    for op in plan.steps() {
        println!("  - {}", op.kind());
        for invocation in op.invocations(settings)? {
            println!("      {invocation}");
        }
    }

    debug!("dry-run complete (no execution)");
    Ok(())
}
