//! Harness configuration loaded from environment variables.

use std::env;
use std::time::Duration;

use identity_core::HarnessError;

const DEFAULT_KNOWN_EMAIL: &str = "mari.doe@example.com";
const DEFAULT_KNOWN_PASSWORD: &str = "Password123";
const DEFAULT_UNKNOWN_EMAIL: &str = "invalid-email@example.com";

/// Harness configuration.
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// Base URL of the identity service, without a trailing slash.
    pub base_url: String,
    /// An account the backend already holds.
    pub known_email: String,
    pub known_password: String,
    /// An email the backend is not expected to hold.
    pub unknown_email: String,
    /// Per-request timeout; transport default when unset.
    pub request_timeout: Option<Duration>,
    /// Only run scenarios whose name contains this.
    pub scenario_filter: Option<String>,
}

impl HarnessConfig {
    /// Configuration with defaults for everything but the base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            known_email: DEFAULT_KNOWN_EMAIL.to_string(),
            known_password: DEFAULT_KNOWN_PASSWORD.to_string(),
            unknown_email: DEFAULT_UNKNOWN_EMAIL.to_string(),
            request_timeout: None,
            scenario_filter: None,
        }
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, HarnessError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key/value source.
    ///
    /// Keys:
    /// - `IDENTITY_API_BASE_URL` (required)
    /// - `KNOWN_USER_EMAIL`, `KNOWN_USER_PASSWORD`, `UNKNOWN_USER_EMAIL`
    /// - `REQUEST_TIMEOUT_SECS`
    /// - `SCENARIO_FILTER`
    pub fn from_lookup<F>(lookup: F) -> Result<Self, HarnessError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("IDENTITY_API_BASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| HarnessError::Config("IDENTITY_API_BASE_URL is not set".to_string()))?;

        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(HarnessError::Config(format!(
                "IDENTITY_API_BASE_URL must be an http(s) URL, got {}",
                base_url
            )));
        }

        let request_timeout = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.parse().map_err(|_| {
                    HarnessError::Config(format!("REQUEST_TIMEOUT_SECS is not a number: {}", raw))
                })?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        let mut config = Self::new(base_url);
        if let Some(email) = lookup("KNOWN_USER_EMAIL") {
            config.known_email = email;
        }
        if let Some(password) = lookup("KNOWN_USER_PASSWORD") {
            config.known_password = password;
        }
        if let Some(email) = lookup("UNKNOWN_USER_EMAIL") {
            config.unknown_email = email;
        }
        config.request_timeout = request_timeout;
        config.scenario_filter = lookup("SCENARIO_FILTER").filter(|f| !f.is_empty());

        Ok(config)
    }
}
