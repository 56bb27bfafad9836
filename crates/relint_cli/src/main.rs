//! relint CLI
//!
//! Resolves flags and configuration into an execution plan for the linter.

mod cli;
mod output;

use std::process::ExitCode;

use clap::Parser;
use miette::{IntoDiagnostic, Result};
use relint_core::{Catalogs, ExecutionPlan};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(has_errors) => {
            if has_errors {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> Result<bool> {
    let options = cli.plan_options();
    let plan = ExecutionPlan::build(&options, &Catalogs::builtin()).into_diagnostic()?;
    debug!("{:?}", plan);

    if cli.print_plan {
        output::output_plan(&plan)?;
        return Ok(false);
    }

    // The analysis driver hands its failures to `output_failures`; until it
    // has run there is nothing to report, so this always exits successfully.
    output::output_failures(&plan, &[])
}
