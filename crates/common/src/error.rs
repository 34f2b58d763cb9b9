//! Error types

use svix::webhooks::WebhookError;
use thiserror::Error;

/// Main error type for the Seam webhook tooling
#[derive(Error, Debug)]
pub enum Error {
    /// Signature verification rejected the delivery. The inner error is the
    /// engine's own, untouched.
    #[error(transparent)]
    Verification(#[from] WebhookError),

    /// The body was authentic but is not JSON
    #[error("Invalid payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True when the caller should answer with an authentication rejection.
    pub fn is_authentication_failure(&self) -> bool {
        matches!(self, Error::Verification(_))
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
