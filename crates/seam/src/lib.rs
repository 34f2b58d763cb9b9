//! Verification of inbound Seam webhooks

pub mod event;
pub mod headers;
pub mod webhook;


pub use event::SeamEvent;
pub use headers::Headers;
pub use svix::webhooks::WebhookError;
pub use webhook::{normalize_headers, HeaderCase, SeamWebhook};
