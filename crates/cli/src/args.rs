//! Command-line arguments

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "seam-webhook", version, about = "Sign and verify Seam webhooks")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print svix-* headers for a payload
    Sign(SignArgs),
    /// Verify a captured delivery and print its event
    Verify(VerifyArgs),
}

#[derive(Args, Debug)]
pub struct SignArgs {
    /// Payload file, or `-` for stdin
    #[arg(long, short)]
    pub payload: PathBuf,

    /// Message id (defaults to a fresh `msg_...`)
    #[arg(long)]
    pub msg_id: Option<String>,

    /// Unix timestamp in seconds (defaults to now)
    #[arg(long)]
    pub timestamp: Option<i64>,
}

#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Payload file, or `-` for stdin
    #[arg(long, short)]
    pub payload: PathBuf,

    /// Header as `Name: value`, repeatable
    #[arg(long = "header", short = 'H', value_parser = parse_header)]
    pub headers: Vec<(String, String)>,

    /// Lowercase header names before verifying (also on when
    /// SEAM_WEBHOOK_CASE_INSENSITIVE is set)
    #[arg(long)]
    pub case_insensitive: bool,

    /// Skip the timestamp freshness check
    #[arg(long)]
    pub ignore_timestamp: bool,
}

/// Parse `Name: value`. Only the first colon separates name from value.
pub fn parse_header(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected `Name: value`, got {:?}", raw))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(format!("empty header name in {:?}", raw));
    }
    Ok((name.to_string(), value.trim().to_string()))
}
