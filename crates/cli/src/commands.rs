//! Subcommand implementations

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use chrono::{DateTime, Utc};
use common::{Config, Error, Result};
use seam::{HeaderCase, Headers, SeamEvent, SeamWebhook};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::args::{SignArgs, VerifyArgs};

/// Sign a payload and render the headers a sender would attach
pub fn sign(config: &Config, args: &SignArgs) -> Result<String> {
    let payload = read_payload(&args.payload)?;
    let msg_id = args
        .msg_id
        .clone()
        .unwrap_or_else(|| format!("msg_{}", Uuid::new_v4().simple()));
    let timestamp = match args.timestamp {
        Some(secs) => DateTime::from_timestamp(secs, 0)
            .ok_or_else(|| Error::Config(format!("timestamp {} out of range", secs)))?,
        None => Utc::now(),
    };

    let webhook = SeamWebhook::from_config(config)?;
    let signature = webhook.sign(&msg_id, timestamp, &payload)?;
    debug!("Signed {} bytes as {}", payload.len(), msg_id);

    Ok(format!(
        "svix-id: {}\nsvix-timestamp: {}\nsvix-signature: {}\n",
        msg_id,
        timestamp.timestamp(),
        signature
    ))
}

/// Verify a captured delivery
pub fn verify(config: &Config, args: &VerifyArgs) -> Result<SeamEvent> {
    let payload = read_payload(&args.payload)?;
    let headers: Headers = args.headers.iter().cloned().collect();

    let mut webhook = SeamWebhook::from_config(config)?;
    if args.case_insensitive {
        webhook = webhook.with_header_case(HeaderCase::Lowercase);
    }

    let result = if args.ignore_timestamp {
        webhook.verify_ignoring_timestamp(&payload, &headers)
    } else {
        webhook.verify(&payload, &headers)
    };

    result.map_err(|e| {
        warn!("Webhook rejected: {}", e);
        e
    })
}

/// Read the raw body without any re-encoding
fn read_payload(path: &Path) -> Result<Vec<u8>> {
    if path == Path::new("-") {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf)?;
        Ok(buf)
    } else {
        Ok(fs::read(path)?)
    }
}
