// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Conventional Commits commit-msg hook.
//!
//! Exits 0 when the message is conventional, 1 otherwise.

use conventional_commit_hook::cli::{run, Cli};
use conventional_commit_hook::HookError;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    // Argument errors exit 1, not clap's usual 2
    let cli = match Cli::try_parse_args() {
        Ok(cli) => cli,
        Err(e) => {
            // Same as clap's own exit path: nowhere left to report a failed write
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    setup_logging(cli.debug);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        // Diagnostic already printed
        Err(HookError::NotConventional) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Set up logging/tracing. Output goes to stderr.
fn setup_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::try_new("conventional_commit_hook=debug,warn")
            .unwrap_or_else(|_| EnvFilter::new("warn"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if debug {
        tracing::debug!(
            "conventional-commit-hook {}",
            conventional_commit_hook::version::version_string()
        );
    }
}
