//! Harness-level error types.

use thiserror::Error;

/// Failures that abort a scenario.
///
/// Protocol rejections (400, 401, 404) are not errors: they come back as the
/// status of an `HttpReply` and scenarios assert on them.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("Transport failure calling {endpoint}: {message}")]
    Transport {
        endpoint: &'static str,
        message: String,
    },

    #[error("Malformed response envelope from {endpoint}: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error(
        "No payload in response from {endpoint} (transport status {status}, envelope status {envelope_status})"
    )]
    MissingPayload {
        endpoint: &'static str,
        status: u16,
        envelope_status: u16,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Domain rule violations when building entities from outside input.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("confirmPassword does not match password")]
    PasswordMismatch,
}
