//! Smocker admin CLI binary.
//!
//! A command-line interface for resetting, configuring and verifying a
//! Smocker mock server.

use std::process::ExitCode;

use clap::Parser;
use smocker_client::cli::{Cli, Command};
use smocker_client::mock::RawJsonDefinition;
use smocker_client::output::PrettyPrint;
use smocker_client::SmockerClient;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let client = match SmockerClient::new(&cli.url) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Hint: Set SMOCKER_URL or pass --url");
            return ExitCode::FAILURE;
        }
    };

    match run(&client, cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Returns whether the command succeeded; only `verify` can fail without an error.
async fn run(client: &SmockerClient, cli: Cli) -> smocker_client::Result<bool> {
    match cli.command {
        Command::Reset => {
            client.reset_all_sessions_and_mocks().await?;
            println!("Reset all sessions and mocks");
        }
        Command::Session { name } => {
            client.start_session(&name).await?;
            println!("Started session {name}");
        }
        Command::AddMock { file } => {
            let json = tokio::fs::read_to_string(&file).await?;
            client.add_mock(&RawJsonDefinition::new(json)).await?;
            println!("Added mock from {}", file.display());
        }
        Command::Verify => {
            let report = client.verification_report().await?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report.pretty_print());
            }
            return Ok(report.passed());
        }
    }
    Ok(true)
}
