use crate::error::AppError;
use crate::reading::AnnualInterpretation;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use std::env;
use std::time::Duration;
use validator::Validate;

pub const ENV_ENABLED: &str = "TAROT_ENHANCEMENT_ENABLED";
pub const ENV_URL: &str = "TAROT_ENHANCEMENT_URL";
pub const ENV_TOKEN: &str = "TAROT_ENHANCEMENT_TOKEN";
pub const ENV_TIMEOUT_SECS: &str = "TAROT_ENHANCEMENT_TIMEOUT_SECS";

const DEFAULT_TIMEOUT_SECS: u64 = 20;

/// Represents the configuration of the optional enhancement (LLM) path.
#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
pub struct EnhancementConfig {
    /// Whether an enhanced interpretation is attempted at all.
    pub enabled: bool,
    /// The endpoint the reading request is POSTed to.
    #[validate(url)]
    pub endpoint: Option<String>,
    /// Optional bearer token sent with each request.
    #[serde(skip_serializing)]
    pub auth_token: Option<String>,
    /// Upper bound on a single enhancement attempt, in seconds (1 to 120).
    #[validate(range(min = 1, max = 120))]
    pub timeout_secs: u64,
}

impl Default for EnhancementConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            endpoint: None,
            auth_token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

fn parse_flag(key: &str, raw: &str) -> Result<bool, AppError> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        other => Err(AppError::Config(format!("{} must be a boolean, got '{}'", key, other))),
    }
}

impl EnhancementConfig {
    /// Loads the configuration from `TAROT_ENHANCEMENT_*` environment variables.
    ///
    /// # Errors
    ///
    /// `AppError::Config` on unparsable values, an invalid URL, an out-of-range
    /// timeout, or enhancement enabled without an endpoint.
    pub fn from_env() -> Result<Self, AppError> {
        let mut config = Self::default();

        if let Ok(raw) = env::var(ENV_ENABLED) {
            config.enabled = parse_flag(ENV_ENABLED, &raw)?;
        }
        config.endpoint = env::var(ENV_URL).ok().filter(|v| !v.trim().is_empty());
        config.auth_token = env::var(ENV_TOKEN).ok().filter(|v| !v.trim().is_empty());
        if let Ok(raw) = env::var(ENV_TIMEOUT_SECS) {
            config.timeout_secs = raw.trim().parse().map_err(|e| {
                AppError::Config(format!("{} must be a number of seconds: {}", ENV_TIMEOUT_SECS, e))
            })?;
        }

        config.validate()?;

        if config.enabled && config.endpoint.is_none() {
            return Err(AppError::Config(format!(
                "{} is required when {} is set",
                ENV_URL, ENV_ENABLED
            )));
        }

        Ok(config)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Represents an archived annual reading, one per year.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct StoredReading {
    /// The unique identifier for the stored reading (UUID).
    pub id: String,
    /// The year the reading covers.
    pub year: i64,
    /// Where the interpretation came from: "local", "llm" or "llm-fallback-local".
    pub source: String,
    /// The full interpretation, stored as JSON.
    pub interpretation: Json<AnnualInterpretation>,
    /// Unix timestamp of when the reading was stored.
    pub created_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_VARS: [&str; 4] = [ENV_ENABLED, ENV_URL, ENV_TOKEN, ENV_TIMEOUT_SECS];

    fn with_env<F: FnOnce()>(vars: &[(&str, Option<&str>)], f: F) {
        let mut all: Vec<(&str, Option<&str>)> = ALL_VARS.iter().map(|k| (*k, None)).collect();
        for (key, value) in vars {
            if let Some(slot) = all.iter_mut().find(|(k, _)| k == key) {
                slot.1 = *value;
            }
        }
        temp_env::with_vars(all, f);
    }

    #[test]
    fn test_defaults_when_unset() {
        with_env(&[], || {
            let config = EnhancementConfig::from_env().unwrap();
            assert!(!config.enabled);
            assert!(config.endpoint.is_none());
            assert_eq!(config.timeout(), Duration::from_secs(20));
        });
    }

    #[test]
    fn test_enabled_with_endpoint() {
        with_env(
            &[
                (ENV_ENABLED, Some("true")),
                (ENV_URL, Some("https://readings.example.com/annual")),
                (ENV_TOKEN, Some("abc")),
                (ENV_TIMEOUT_SECS, Some("8")),
            ],
            || {
                let config = EnhancementConfig::from_env().unwrap();
                assert!(config.enabled);
                assert_eq!(config.auth_token.as_deref(), Some("abc"));
                assert_eq!(config.timeout_secs, 8);
            },
        );
    }

    #[test]
    fn test_enabled_without_endpoint_fails() {
        with_env(&[(ENV_ENABLED, Some("1"))], || {
            assert!(matches!(EnhancementConfig::from_env(), Err(AppError::Config(_))));
        });
    }

    #[test]
    fn test_invalid_values_fail() {
        with_env(&[(ENV_ENABLED, Some("maybe"))], || {
            assert!(EnhancementConfig::from_env().is_err());
        });
        with_env(&[(ENV_URL, Some("not a url"))], || {
            assert!(EnhancementConfig::from_env().is_err());
        });
        with_env(&[(ENV_TIMEOUT_SECS, Some("0"))], || {
            assert!(EnhancementConfig::from_env().is_err());
        });
        with_env(&[(ENV_TIMEOUT_SECS, Some("soon"))], || {
            assert!(EnhancementConfig::from_env().is_err());
        });
    }

    #[test]
    fn test_token_not_serialized() {
        let config = EnhancementConfig {
            auth_token: Some("secret".to_string()),
            ..EnhancementConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("secret"));
    }
}
