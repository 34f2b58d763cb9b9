//! Seam webhook verifier

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use common::Result;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use svix::webhooks::Webhook;

use crate::event::SeamEvent;
use crate::headers::Headers;

/// How header names are treated before they reach the signature check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderCase {
    /// Forward headers exactly as received
    #[default]
    Preserve,
    /// Lowercase every header name first, for transports that rewrite casing
    Lowercase,
}

/// Verifies Seam webhook deliveries signed with one secret.
///
/// Signature, timestamp and header checks are done by the Svix engine. The
/// secret is only handed to it when a delivery is verified, so a malformed
/// secret is reported by the first call rather than at construction. It is
/// not reachable afterwards and is redacted from `Debug`.
#[derive(Debug, Clone)]
pub struct SeamWebhook {
    secret: SecretString,
    header_case: HeaderCase,
}

impl SeamWebhook {
    /// Verifier that passes header names through unchanged
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: SecretString::new(secret.into()),
            header_case: HeaderCase::Preserve,
        }
    }

    /// Verifier that lowercases header names before checking them
    pub fn case_insensitive(secret: impl Into<String>) -> Self {
        Self::new(secret).with_header_case(HeaderCase::Lowercase)
    }

    /// Build from loaded configuration
    pub fn from_config(config: &common::Config) -> Result<Self> {
        let header_case = if config.case_insensitive_headers {
            HeaderCase::Lowercase
        } else {
            HeaderCase::Preserve
        };

        Ok(Self {
            secret: config.webhook_secret()?.clone(),
            header_case,
        })
    }

    pub fn with_header_case(mut self, header_case: HeaderCase) -> Self {
        self.header_case = header_case;
        self
    }

    pub fn header_case(&self) -> HeaderCase {
        self.header_case
    }

    /// Verify a delivery and return its event.
    ///
    /// `payload` must be the body exactly as received. A rejection from the
    /// engine comes back as `Error::Verification` holding the engine's error
    /// unchanged.
    pub fn verify(&self, payload: impl AsRef<[u8]>, headers: &Headers) -> Result<SeamEvent> {
        let payload = payload.as_ref();
        self.engine()?
            .verify(payload, &self.prepare(headers).to_header_map())?;
        decode(payload)
    }

    /// Check the signature of a stored delivery regardless of its age
    pub fn verify_ignoring_timestamp(
        &self,
        payload: impl AsRef<[u8]>,
        headers: &Headers,
    ) -> Result<SeamEvent> {
        let payload = payload.as_ref();
        self.engine()?
            .verify_ignoring_timestamp(payload, &self.prepare(headers).to_header_map())?;
        decode(payload)
    }

    /// Produce the `svix-signature` value a sender holding this secret would
    /// attach
    pub fn sign(&self, msg_id: &str, timestamp: DateTime<Utc>, payload: &[u8]) -> Result<String> {
        Ok(self.engine()?.sign(msg_id, timestamp.timestamp(), payload)?)
    }

    fn engine(&self) -> Result<Webhook> {
        Ok(Webhook::new(self.secret.expose_secret())?)
    }

    fn prepare<'a>(&self, headers: &'a Headers) -> Cow<'a, Headers> {
        match self.header_case {
            HeaderCase::Preserve => Cow::Borrowed(headers),
            HeaderCase::Lowercase => Cow::Owned(normalize_headers(headers)),
        }
    }
}

/// Lowercase every header name, keeping values and first-seen order.
///
/// Names that collide after lowercasing collapse into one entry holding the
/// value that came last.
pub fn normalize_headers(headers: &Headers) -> Headers {
    headers
        .iter()
        .map(|(name, value)| (name.to_lowercase(), value))
        .collect()
}

fn decode(payload: &[u8]) -> Result<SeamEvent> {
    let value: Value = serde_json::from_slice(payload)?;
    Ok(SeamEvent::from(value))
}
