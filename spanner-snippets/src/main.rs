use std::process::ExitCode;

use clap::Parser;
use tokio::time::Instant;

mod cli;

use cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    let started = Instant::now();
    let cli = Cli::parse();

    match cli::run(cli, started).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => ExitCode::from(err.exit_code()),
    }
}
