//! Seam webhook developer tool
//!
//! Signs sample payloads and verifies captured deliveries offline, using the
//! secret from `SEAM_WEBHOOK_SECRET`.

use clap::Parser;
use tracing::info;

mod args;
mod commands;

use args::{Cli, Command};

fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing (stderr, so stdout stays machine-readable)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("seam=debug".parse()?)
                .add_directive("common=info".parse()?)
                .add_directive("cli=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let config = common::Config::from_env();

    match cli.command {
        Command::Sign(args) => {
            info!("Signing payload");
            let output = commands::sign(&config, &args)?;
            print!("{}", output);
        }
        Command::Verify(args) => {
            let event = commands::verify(&config, &args)?;
            info!(
                "Verified {} event",
                event.event_type().unwrap_or("untyped")
            );
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
    }

    Ok(())
}
