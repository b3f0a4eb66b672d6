//! lintgate - Coding-standards gate for files changed in a PR
//!
//! CLI entry point. Run from the repository root with no arguments; behavior
//! is determined by `.circleci/script_variables.yml` and the environment.
//!
//! # Execution Flow
//!
//! 1. Initialize logging (stderr, `RUST_LOG` aware)
//! 2. Create tokio runtime for subprocess execution
//! 3. Build a [`GateContext`] from the working directory and environment
//! 4. Run the gate: config → dependency probe → git diff → filter → check
//! 5. Print the categorized report to stdout
//! 6. Exit 0 (nothing to check or all passed) or 1 (config/dependency error
//!    or any failed file)

use camino::Utf8PathBuf;
use lintgate::services::SystemRunner;
use lintgate::{APP_NAME, GateContext, VERSION, report, run_gate};
use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(err) = lintgate::logging::setup_logging(false) {
        eprintln!("{err:#}");
        return ExitCode::FAILURE;
    }

    tracing::info!("Starting {} v{}", APP_NAME, VERSION);

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .worker_threads(2)
        .thread_name("lintgate-worker")
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("Failed to create tokio runtime: {err}");
            return ExitCode::FAILURE;
        }
    };

    let repo_root = match std::env::current_dir()
        .map_err(anyhow::Error::from)
        .and_then(|dir| {
            Utf8PathBuf::from_path_buf(dir)
                .map_err(|dir| anyhow::anyhow!("Working directory is not UTF-8: {}", dir.display()))
        }) {
        Ok(root) => root,
        Err(err) => {
            eprintln!("{err:#}");
            return ExitCode::FAILURE;
        }
    };

    let ctx = GateContext::from_environment(&repo_root);
    let runner = SystemRunner;

    match runtime.block_on(run_gate(&ctx, &runner)) {
        Ok(gate_report) => {
            if let Err(err) = report::print_report(&gate_report) {
                eprintln!("Failed to write report: {err}");
                return ExitCode::FAILURE;
            }
            if gate_report.has_failures() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
