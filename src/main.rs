// src/main.rs

use std::process::ExitCode;

use godeploy::{cli, logging, run};
use tracing::warn;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = cli::parse();

    if args.request().is_empty() {
        if let Err(err) = cli::print_help() {
            eprintln!("godeploy error: {err}");
            return ExitCode::FAILURE;
        }
        return ExitCode::SUCCESS;
    }

    if let Err(err) = logging::init_logging(args.log_level) {
        eprintln!("godeploy error: {err:?}");
        return ExitCode::FAILURE;
    }

    tokio::select! {
        result = run(args) => match result {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("godeploy error: {err}");
                ExitCode::from(err.exit_code())
            }
        },
        () = interrupted() => {
            eprintln!("\ninterrupted by user; exiting");
            ExitCode::SUCCESS
        }
    }
}

/// Resolves on Ctrl-C. If the handler cannot be installed, never resolves.
async fn interrupted() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
}
