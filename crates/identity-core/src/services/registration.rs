//! Registration fixture - establishes a freshly registered user.

use std::sync::Arc;

use identity_shared::TokenPayload;

use crate::domain::{RegistrationResult, User};
use crate::error::HarnessError;
use crate::ports::{HttpReply, IdentityApi, UserFactory};

/// Registers a newly generated user and hands back its credentials.
///
/// One attempt per call. Callers that need a second user call again and rely
/// on the factory's randomness for a distinct identity.
#[derive(Clone)]
pub struct RegistrationFixture {
    api: Arc<dyn IdentityApi>,
    factory: Arc<dyn UserFactory>,
}

impl RegistrationFixture {
    pub fn new(api: Arc<dyn IdentityApi>, factory: Arc<dyn UserFactory>) -> Self {
        Self { api, factory }
    }

    /// Generate a user and submit it, returning the reply uninterpreted.
    ///
    /// For callers that assert on the registration response itself.
    pub async fn submit_new_user(&self) -> Result<(User, HttpReply<TokenPayload>), HarnessError> {
        let user = self.factory.generate();
        tracing::debug!(email = %user.email(), "Registering synthetic user");

        let reply = self.api.register(&user).await?;
        Ok((user, reply))
    }

    /// Generate, register and unwrap.
    ///
    /// # Errors
    ///
    /// Transport failures and unparseable envelopes propagate unchanged. An
    /// envelope that reports failure or carries no token payload yields
    /// [`HarnessError::MissingPayload`].
    pub async fn register_user(&self) -> Result<RegistrationResult, HarnessError> {
        let (user, reply) = self.submit_new_user().await?;
        let envelope = reply.envelope()?;
        let envelope_status = envelope.status_code;

        let tokens = envelope
            .into_success_data()
            .ok_or(HarnessError::MissingPayload {
                endpoint: reply.endpoint,
                status: reply.status,
                envelope_status,
            })?;

        Ok(RegistrationResult {
            registered_user: user,
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
        })
    }
}
