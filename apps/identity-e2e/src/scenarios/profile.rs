//! Profile read and update scenarios.

use identity_shared::UpdateProfileRequest;

use super::check::{ensure, expect_rejected, expect_status};
use crate::error::{ScenarioError, ScenarioResult};
use crate::harness::Harness;

/// Well-formed JWT whose signature no backend will accept.
const FORGED_ACCESS_TOKEN: &str = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.\
eyJzdWIiOiJub2JvZHlAZXhhbXBsZS5jb20iLCJleHAiOjQxMDI0NDQ4MDB9.\
c2lnbmF0dXJlLXRoYXQtZG9lcy1ub3QtbWF0Y2g";

const UPDATED_DISPLAY_NAME: &str = "Updated Gomi Sharp";

pub async fn profile_echoes_registered_user(harness: &Harness) -> ScenarioResult {
    let registered = harness.fixture().register_user().await?;
    let user = &registered.registered_user;

    let reply = harness
        .api()
        .profile(Some(&registered.access_token))
        .await?;
    expect_status(&reply, 200)?;

    let envelope = reply.envelope()?;
    ensure(envelope.is_success, || "profile envelope reports failure".to_string())?;
    let profile = envelope
        .data
        .ok_or_else(|| ScenarioError::Assertion("profile envelope without data".to_string()))?;

    ensure(profile.username == user.email(), || {
        format!("username {} != registered email {}", profile.username, user.email())
    })?;
    ensure(profile.display_name == user.display_name(), || {
        format!(
            "displayName {} != registered {}",
            profile.display_name,
            user.display_name()
        )
    })?;
    ensure(profile.gender == user.gender().as_str(), || {
        format!("gender {} != registered {}", profile.gender, user.gender())
    })
}

pub async fn profile_with_invalid_token_is_unauthorized(harness: &Harness) -> ScenarioResult {
    let reply = harness.api().profile(Some(FORGED_ACCESS_TOKEN)).await?;
    expect_rejected(&reply, 401)
}

pub async fn profile_without_token_is_unauthorized(harness: &Harness) -> ScenarioResult {
    let reply = harness.api().profile(None).await?;
    expect_rejected(&reply, 401)
}

pub async fn update_profile_display_name(harness: &Harness) -> ScenarioResult {
    let registered = harness.fixture().register_user().await?;
    let token = registered.access_token.as_str();

    let update = harness
        .api()
        .update_profile(Some(token), &UpdateProfileRequest::display_name(UPDATED_DISPLAY_NAME))
        .await?;
    expect_status(&update, 200)?;
    let updated = update.envelope()?;
    ensure(updated.is_success, || "update envelope reports failure".to_string())?;
    let echoed = updated.data.map(|p| p.display_name);
    ensure(echoed.as_deref() == Some(UPDATED_DISPLAY_NAME), || {
        format!("update echoed displayName {:?}", echoed)
    })?;

    // Write, then read back.
    let fetched = harness.api().profile(Some(token)).await?;
    expect_status(&fetched, 200)?;
    let fetched = fetched.envelope()?;
    ensure(fetched.is_success, || "profile envelope reports failure".to_string())?;
    let stored = fetched.data.map(|p| p.display_name);
    ensure(stored.as_deref() == Some(UPDATED_DISPLAY_NAME), || {
        format!("profile after update has displayName {:?}", stored)
    })
}

pub async fn update_profile_without_token_is_unauthorized(harness: &Harness) -> ScenarioResult {
    let reply = harness
        .api()
        .update_profile(None, &UpdateProfileRequest::display_name(UPDATED_DISPLAY_NAME))
        .await?;
    expect_rejected(&reply, 401)
}

pub async fn update_profile_with_invalid_token_is_unauthorized(harness: &Harness) -> ScenarioResult {
    let reply = harness
        .api()
        .update_profile(
            Some(FORGED_ACCESS_TOKEN),
            &UpdateProfileRequest::display_name(UPDATED_DISPLAY_NAME),
        )
        .await?;
    expect_rejected(&reply, 401)
}
