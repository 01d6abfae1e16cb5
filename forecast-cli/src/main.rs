//! Binary crate for the `forecast` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Log setup
//! - Turning failures into messages and exit codes
//!
//! User-facing messages go to stdout, logs to stderr.

use std::process::ExitCode;

use clap::{Parser, error::ErrorKind};
use forecast_core::ValidationError;
use tracing_subscriber::EnvFilter;

mod cli;
mod failure;

fn setup_tracing(verbose: bool) -> anyhow::Result<()> {
    let default = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .compact()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    println!("{}\n", cli::BANNER);

    let cmd = match cli::Cli::try_parse() {
        Ok(cmd) => cmd,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(_) => {
            let found = std::env::args().count();
            println!("{}", ValidationError::Usage { found });
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = setup_tracing(cmd.verbose) {
        eprintln!("failed to set up logging: {err}");
    }

    match cmd.run().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "run failed");
            println!("{}", failure::describe_failure(&err));
            ExitCode::FAILURE
        }
    }
}
