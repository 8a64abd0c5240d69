//! CLI entry point for the deficient board tromino tiler

use clap::Parser;
use std::io::Write;
use std::process::ExitCode;
use trominotile::io::cli::{Cli, TilingRunner, exit_code, parse_exit_code, report_failure};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => {
            // Help and version output also arrive here
            let _ = error.print();
            return ExitCode::from(parse_exit_code(error.kind()));
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .init();

    match TilingRunner::new(cli).run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            log::debug!("tiling failed: {error:?}");
            let mut stderr = std::io::stderr().lock();
            let _ = report_failure(&error, &mut stderr);
            let _ = stderr.flush();
            ExitCode::from(exit_code(&error))
        }
    }
}
