//! Assertion helpers shared by scenarios.

use serde::de::DeserializeOwned;

use identity_core::ports::HttpReply;
use identity_shared::TokenPayload;

use crate::error::ScenarioError;

pub(crate) fn ensure(condition: bool, message: impl FnOnce() -> String) -> Result<(), ScenarioError> {
    if condition {
        Ok(())
    } else {
        Err(ScenarioError::Assertion(message()))
    }
}

pub(crate) fn expect_status<T>(reply: &HttpReply<T>, expected: u16) -> Result<(), ScenarioError> {
    ensure(reply.status == expected, || {
        format!(
            "{}: expected HTTP {}, got {} (body: {})",
            reply.endpoint, expected, reply.status, reply.body
        )
    })
}

/// Expect a rejection with `status`. When the body is an envelope, it must
/// not claim success.
pub(crate) fn expect_rejected<T: DeserializeOwned>(
    reply: &HttpReply<T>,
    status: u16,
) -> Result<(), ScenarioError> {
    expect_status(reply, status)?;
    if let Ok(envelope) = reply.envelope() {
        ensure(!envelope.is_success, || {
            format!("{}: HTTP {} but envelope reports success", reply.endpoint, status)
        })?;
    }
    Ok(())
}

/// Expect HTTP 200, a success envelope and a usable token pair.
pub(crate) fn expect_tokens(reply: &HttpReply<TokenPayload>) -> Result<TokenPayload, ScenarioError> {
    expect_status(reply, 200)?;
    let envelope = reply.envelope()?;
    ensure(envelope.is_success, || {
        format!("{}: envelope reports failure", reply.endpoint)
    })?;

    let tokens = envelope.data.ok_or_else(|| {
        ScenarioError::Assertion(format!("{}: success envelope without tokens", reply.endpoint))
    })?;

    ensure(!tokens.access_token.is_empty(), || {
        format!("{}: empty access token", reply.endpoint)
    })?;
    ensure(!tokens.refresh_token.is_empty(), || {
        format!("{}: empty refresh token", reply.endpoint)
    })?;
    ensure(tokens.expires_in > 0, || {
        format!("{}: non-positive expiresIn {}", reply.endpoint, tokens.expires_in)
    })?;

    Ok(tokens)
}
