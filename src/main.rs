//! Archprompt CLI entry point.
//!
//! Parses arguments, installs logging, dispatches to the command handler,
//! and maps errors to exit codes.

use archprompt::cli::{Cli, parse_error_exit_code};
use archprompt::{commands, exit_codes, logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = match Cli::try_parse_args() {
        Ok(cli) => cli,
        Err(err) => {
            // Usage errors go to stderr, --help/--version to stdout
            let _ = err.print();
            return ExitCode::from(parse_error_exit_code(&err) as u8);
        }
    };

    logging::init(cli.verbose, cli.quiet);

    match commands::dispatch(cli.command, cli.config.as_deref()) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
