use std::io;

use anyhow::{Context, Result};
use clap::Parser;

use basic_types::cli::{self, Cli, Command};
use basic_types::logging::init_tracing;
use basic_types::messages::Messages;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config().context("failed to load configuration")?;

    init_tracing(&config.logging.level);
    tracing::debug!(?config, "Resolved configuration");

    let messages = Messages::new(config.display.language);
    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();

    match cli.command {
        Command::Strings { text, json } => {
            cli::run_strings(text.as_deref(), json, stdin, &mut stdout, &messages)
                .context("strings command failed")?;
        }
        Command::Temperature => {
            let outcome =
                cli::run_temperature(stdin, &mut stdout, &messages, config.display.precision)
                    .context("temperature menu failed")?;
            tracing::info!(
                conversions = outcome.conversions.len(),
                "Temperature session ended"
            );
        }
        Command::Numbers { json } => {
            cli::run_numbers(json, &mut stdout, &messages).context("numbers demo failed")?;
        }
    }

    Ok(())
}
