//! xts: run commands declared in an `.xts` YAML file.
//!
//! This is the main entry point for the `xts` CLI. It selects the config,
//! resolves the command against it, dispatches to the runner, and reports
//! errors with proper exit codes.

mod cli;
pub mod config;
pub mod disambiguate;
pub mod dispatch;
pub mod error;
pub mod exit_codes;
pub mod invocation;
mod logging;
pub mod plugin;
mod report;
pub mod resolver;

#[cfg(test)]
mod test_support;

use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init();

    let args: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    match invocation::run_from_env(&args) {
        Ok(outcome) => {
            report::outcome(&outcome);
            ExitCode::from(exit_codes::from_step(outcome.exit_code()))
        }
        Err(err) => {
            report::failure(&err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
