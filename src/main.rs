//! fresh-cli - Freshservice tickets from the command line
//!
//! # Configuration
//!
//! Set the following environment variables (or use a `.env` file):
//!
//! - `FRESHSERVICE_API_KEY`: API key (or pass `--api-key`)
//! - `FRESHSERVICE_DOMAIN`: Freshservice domain, default `freshservice.com`
//!
//! # Usage
//!
//! ```bash
//! fresh-cli --domain acme.freshservice.com list --status open
//! ```

use anyhow::Context;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing_subscriber::{fmt, EnvFilter};

use fresh_cli::cli::{self, Cli};
use fresh_cli::client::FreshClient;
use fresh_cli::config::Config;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Load .env file if present (ignore errors if not found)
    dotenvy::dotenv().ok();

    let args = Cli::parse();

    // Logs go to stderr; stdout carries command output
    let default_filter = if args.verbose {
        "fresh_cli=debug"
    } else {
        "fresh_cli=warn"
    };
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    // A missing API key is a usage error, reported before any request
    let config = match Config::from_env().resolve(args.api_key.clone(), args.domain.clone()) {
        Ok(config) => config,
        Err(e) => Cli::command()
            .error(ErrorKind::MissingRequiredArgument, e.to_string())
            .exit(),
    };

    tracing::debug!(domain = %config.domain, "Configuration loaded");

    if let Err(e) = run(&config, args).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(config: &Config, args: Cli) -> anyhow::Result<()> {
    let client = FreshClient::new(config).context("Failed to create Freshservice client")?;

    let output = cli::run(&client, args.command).await?;
    println!("{}", output);

    Ok(())
}
