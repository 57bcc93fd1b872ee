// dq-notifier/src/main.rs

mod cli;
mod commands;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use cli::{Cli, Commands, LAMBDA_RUNTIME_API};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Setup Logging (Tracing)
    // Logs go to stderr (CloudWatch in Lambda), stdout stays for command output.
    tracing_subscriber::fmt()
        .with_ansi(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let runtime_api = std::env::var(LAMBDA_RUNTIME_API).ok();
    let Some(command) = Cli::parse().resolve_command(runtime_api) else {
        Cli::command()
            .error(
                ErrorKind::MissingSubcommand,
                "missing command (serve | invoke); see --help",
            )
            .exit()
    };

    match command {
        // --- USE CASE: LAMBDA RUNTIME ---
        Commands::Serve { config } => commands::serve::execute(config).await,

        // --- USE CASE: LOCAL INVOCATION ---
        Commands::Invoke {
            event,
            result_file,
            dry_run,
            output,
            format,
            config,
        } => {
            let options = commands::invoke::InvokeOptions {
                event,
                result_file,
                dry_run,
                output,
                format,
            };
            commands::invoke::execute(options, config).await
        }
    }
}
