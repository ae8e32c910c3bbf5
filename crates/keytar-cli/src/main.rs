//! keytar CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use keytar::KeychainError;
use keytar_cli::{logging, run, Cli, USAGE_EXIT_CODE};
use keytar_core::Config;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // --help and --version are reported through the same path.
            return if e.use_stderr() {
                ExitCode::from(USAGE_EXIT_CODE)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let config = Config::resolve(cli.config.as_deref());
    let level = config
        .as_ref()
        .map(|c| c.logging.level)
        .unwrap_or_default();
    logging::init(cli.verbose, level);

    match run(cli, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            let code = e
                .downcast_ref::<KeychainError>()
                .map(KeychainError::exit_code)
                .unwrap_or(1);
            ExitCode::from(code)
        }
    }
}
