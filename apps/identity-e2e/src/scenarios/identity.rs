//! Registration, login, lookup and token refresh scenarios.

use identity_core::domain::{Gender, User};
use identity_shared::{LoginRequest, RefreshTokenRequest};

use super::check::{ensure, expect_rejected, expect_status, expect_tokens};
use crate::error::ScenarioResult;
use crate::harness::Harness;

const WRONG_PASSWORD: &str = "WrongPassword";
const INVALID_REFRESH_TOKEN: &str = "invalid-refresh-token";

pub async fn register_fresh_user(harness: &Harness) -> ScenarioResult {
    let (user, reply) = harness.fixture().submit_new_user().await?;

    let tokens = expect_tokens(&reply)?;
    tracing::debug!(email = %user.email(), expires_in = tokens.expires_in, "Registered");
    Ok(())
}

pub async fn register_existing_email_is_rejected(harness: &Harness) -> ScenarioResult {
    let config = harness.config();
    let existing = User::new(
        config.known_email.clone(),
        config.known_password.clone(),
        "Mari Doe",
        Gender::Female,
        vec!["Key1".to_string(), "Key2".to_string()],
        "UK",
    );

    let reply = harness.api().register(&existing).await?;
    expect_rejected(&reply, 400)
}

pub async fn login_known_user(harness: &Harness) -> ScenarioResult {
    let config = harness.config();
    let request = LoginRequest::new(config.known_email.clone(), config.known_password.clone());

    let reply = harness.api().login(&request).await?;
    expect_tokens(&reply)?;
    Ok(())
}

pub async fn login_registered_user(harness: &Harness) -> ScenarioResult {
    let registered = harness.fixture().register_user().await?;
    let user = &registered.registered_user;

    let reply = harness
        .api()
        .login(&LoginRequest::new(user.email(), user.password()))
        .await?;
    expect_tokens(&reply)?;
    Ok(())
}

pub async fn login_wrong_password_is_unauthorized(harness: &Harness) -> ScenarioResult {
    let request = LoginRequest::new(harness.config().known_email.clone(), WRONG_PASSWORD);

    let reply = harness.api().login(&request).await?;
    expect_rejected(&reply, 401)
}

pub async fn login_unknown_email_is_unauthorized(harness: &Harness) -> ScenarioResult {
    let config = harness.config();
    let request = LoginRequest::new(config.unknown_email.clone(), config.known_password.clone());

    let reply = harness.api().login(&request).await?;
    expect_rejected(&reply, 401)
}

pub async fn lookup_registered_email(harness: &Harness) -> ScenarioResult {
    let registered = harness.fixture().register_user().await?;

    let reply = harness
        .api()
        .lookup_by_email(registered.registered_user.email())
        .await?;
    expect_status(&reply, 200)
}

pub async fn lookup_unknown_email_is_not_found(harness: &Harness) -> ScenarioResult {
    let reply = harness
        .api()
        .lookup_by_email(&harness.config().unknown_email)
        .await?;
    expect_status(&reply, 404)
}

pub async fn refresh_issued_token(harness: &Harness) -> ScenarioResult {
    let registered = harness.fixture().register_user().await?;

    let reply = harness
        .api()
        .refresh(&RefreshTokenRequest::new(registered.refresh_token.clone()))
        .await?;
    let tokens = expect_tokens(&reply)?;

    ensure(tokens.access_token != registered.access_token, || {
        "refresh returned the access token it was meant to replace".to_string()
    })
}

pub async fn refresh_invalid_token_is_unauthorized(harness: &Harness) -> ScenarioResult {
    let reply = harness
        .api()
        .refresh(&RefreshTokenRequest::new(INVALID_REFRESH_TOKEN))
        .await?;
    expect_rejected(&reply, 401)
}
