//! Application configuration

use secrecy::SecretString;
use std::env;
use tracing::warn;

use crate::error::{Error, Result};

/// Main application configuration
///
/// The freshness window for signed timestamps is fixed by the Svix engine
/// (five minutes) and is not configurable.
#[derive(Debug, Clone)]
pub struct Config {
    /// Shared webhook secret (`whsec_...`). Redacted in debug output.
    webhook_secret: Option<SecretString>,
    /// Lowercase header names before verification
    pub case_insensitive_headers: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            webhook_secret: lookup("SEAM_WEBHOOK_SECRET")
                .filter(|s| !s.is_empty())
                .map(SecretString::new),
            case_insensitive_headers: lookup("SEAM_WEBHOOK_CASE_INSENSITIVE")
                .map(|v| parse_flag("SEAM_WEBHOOK_CASE_INSENSITIVE", &v))
                .unwrap_or(false),
        }
    }

    /// The configured webhook secret
    pub fn webhook_secret(&self) -> Result<&SecretString> {
        self.webhook_secret
            .as_ref()
            .ok_or_else(|| Error::Config("SEAM_WEBHOOK_SECRET is not set".to_string()))
    }
}

fn parse_flag(key: &str, value: &str) -> bool {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "" | "0" | "false" | "no" | "off" => false,
        _ => {
            warn!("Ignoring invalid {}={:?}, using false", key, value);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert!(!config.case_insensitive_headers);
        assert!(matches!(config.webhook_secret(), Err(Error::Config(_))));
    }

    #[test]
    fn test_reads_all_keys() {
        let config = config_from(&[
            ("SEAM_WEBHOOK_SECRET", "whsec_test"),
            ("SEAM_WEBHOOK_CASE_INSENSITIVE", "TRUE"),
        ]);
        assert_eq!(config.webhook_secret().unwrap().expose_secret(), "whsec_test");
        assert!(config.case_insensitive_headers);
    }

    #[test]
    fn test_unrecognized_flag_is_false() {
        let config = config_from(&[("SEAM_WEBHOOK_CASE_INSENSITIVE", "maybe")]);
        assert!(!config.case_insensitive_headers);
    }

    #[test]
    fn test_tolerance_setting_is_ignored() {
        // Values that would overflow a duration must not matter: the window
        // belongs to the engine.
        let config = config_from(&[
            ("SEAM_WEBHOOK_SECRET", "whsec_test"),
            ("SEAM_WEBHOOK_TOLERANCE_SECS", "9223372036854775807"),
        ]);
        assert!(config.webhook_secret().is_ok());
    }

    #[test]
    fn test_empty_secret_is_unset() {
        let config = config_from(&[("SEAM_WEBHOOK_SECRET", "")]);
        assert!(config.webhook_secret().is_err());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = config_from(&[("SEAM_WEBHOOK_SECRET", "whsec_supersecret")]);
        let debug = format!("{:?}", config);
        assert!(!debug.contains("supersecret"));
    }
}
