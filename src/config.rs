use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::triage::messages::Language;

/// Application-level constants
pub const APP_NAME: &str = "triage";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Where the triage service listens when nothing else is configured.
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";

/// Number dialed when the service does not supply one.
pub const FALLBACK_EMERGENCY_NUMBER: &str = "911";

pub const ENV_API_BASE: &str = "TRIAGE_API_BASE";
pub const ENV_TIMEOUT_SECS: &str = "TRIAGE_TIMEOUT_SECS";
pub const ENV_LANG: &str = "TRIAGE_LANG";
pub const ENV_EMERGENCY_NUMBER: &str = "TRIAGE_EMERGENCY_NUMBER";

/// Log filter used when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "triage_client=info,triage=info,warn"
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a positive number of seconds, got {value:?}")]
    InvalidTimeout { var: &'static str, value: String },

    #[error("{var} must be \"ar\" or \"en\", got {value:?}")]
    InvalidLanguage { var: &'static str, value: String },

    #[error("{var} must not be empty")]
    Empty { var: &'static str },
}

/// Client settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the triage service, without trailing slash.
    pub api_base: String,
    /// Per-request timeout. `None` waits forever.
    pub request_timeout_secs: Option<u64>,
    /// Language of every fixed string shown to the user.
    pub language: Language,
    /// Fallback number for the call disclosure.
    pub emergency_number: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            request_timeout_secs: None,
            language: Language::Arabic,
            emergency_number: FALLBACK_EMERGENCY_NUMBER.to_string(),
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by the `TRIAGE_*` environment variables.
    ///
    /// An invalid override is logged and ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let overrides: [(&'static str, fn(&mut Self, &'static str, &str) -> Result<(), ConfigError>); 4] = [
            (ENV_API_BASE, Self::apply_api_base),
            (ENV_TIMEOUT_SECS, Self::apply_timeout),
            (ENV_LANG, Self::apply_language),
            (ENV_EMERGENCY_NUMBER, Self::apply_emergency_number),
        ];

        for (var, apply) in overrides {
            let Some(value) = lookup(var) else { continue };
            if let Err(e) = apply(&mut config, var, &value) {
                tracing::warn!(error = %e, "Ignoring invalid configuration override");
            }
        }
        config
    }

    /// Replace the base URL, normalizing away trailing slashes.
    pub fn with_api_base(mut self, base: &str) -> Self {
        self.api_base = normalize_base(base);
        self
    }

    fn apply_api_base(&mut self, var: &'static str, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(ConfigError::Empty { var });
        }
        self.api_base = normalize_base(value);
        Ok(())
    }

    fn apply_timeout(&mut self, var: &'static str, value: &str) -> Result<(), ConfigError> {
        match value.trim().parse::<u64>() {
            Ok(secs) if secs > 0 => {
                self.request_timeout_secs = Some(secs);
                Ok(())
            }
            _ => Err(ConfigError::InvalidTimeout { var, value: value.to_string() }),
        }
    }

    fn apply_language(&mut self, var: &'static str, value: &str) -> Result<(), ConfigError> {
        self.language = value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidLanguage { var, value: value.to_string() })?;
        Ok(())
    }

    fn apply_emergency_number(&mut self, var: &'static str, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(ConfigError::Empty { var });
        }
        self.emergency_number = value.to_string();
        Ok(())
    }
}

fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base, "http://127.0.0.1:5000");
        assert_eq!(config.request_timeout_secs, None);
        assert_eq!(config.language, Language::Arabic);
        assert_eq!(config.emergency_number, "911");
    }

    #[test]
    fn env_overrides_apply() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            (ENV_API_BASE, "http://triage.local:8080//"),
            (ENV_TIMEOUT_SECS, "15"),
            (ENV_LANG, "en"),
            (ENV_EMERGENCY_NUMBER, " 997 "),
        ]));
        assert_eq!(config.api_base, "http://triage.local:8080");
        assert_eq!(config.request_timeout_secs, Some(15));
        assert_eq!(config.language, Language::English);
        assert_eq!(config.emergency_number, "997");
    }

    #[test]
    fn invalid_overrides_keep_defaults() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            (ENV_API_BASE, "   "),
            (ENV_TIMEOUT_SECS, "0"),
            (ENV_LANG, "fr"),
            (ENV_EMERGENCY_NUMBER, ""),
        ]));
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn with_api_base_strips_trailing_slash() {
        let config = ClientConfig::default().with_api_base("http://localhost:5000/");
        assert_eq!(config.api_base, "http://localhost:5000");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, env!("CARGO_PKG_VERSION"));
    }
}
