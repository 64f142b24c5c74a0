use std::io;
use std::process::ExitCode;

use clap::Parser;
use timed_relax::{Cli, Outcome};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr, stdout only carries the timing report
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = cli.config();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match timed_relax::run(&config, &mut out) {
        Ok(outcomes) => {
            if config.fail_exit_code && outcomes.iter().any(Outcome::is_exception) {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to write report");
            ExitCode::FAILURE
        }
    }
}
