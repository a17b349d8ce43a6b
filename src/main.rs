use std::io;
use std::process::ExitCode;

use anyhow::Result;
use gitignite::api::ApiClient;
use gitignite::cli::Cli;
use gitignite::commands;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Logs go to stderr so stdout carries only command output.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(EnvFilter::new(format!("gitignite={level}")))
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse_from_args(std::env::args_os());
    init_tracing(cli.verbose);

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<()> {
    let request = cli.request();
    tracing::debug!(?request, "parsed request");

    let client = ApiClient::with_base_url(&cli.repository_url)?;
    let mut stdout = io::stdout().lock();
    commands::run(&client, &request, &mut stdout).await
}
