//! Identity service port.

use std::marker::PhantomData;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use identity_shared::{
    LoginRequest, RefreshTokenRequest, ResponseEnvelope, TokenPayload, UpdateProfileRequest,
    UserProfilePayload,
};

use crate::domain::User;
use crate::error::HarnessError;

/// Raw outcome of one HTTP call: the transport status and the unparsed body.
///
/// The body is parsed on demand with [`HttpReply::envelope`], so scenarios
/// that only care about the status never fail on an empty 401 body.
#[derive(Debug, Clone)]
pub struct HttpReply<T> {
    pub endpoint: &'static str,
    pub status: u16,
    pub body: String,
    payload: PhantomData<fn() -> T>,
}

impl<T> HttpReply<T> {
    pub fn new(endpoint: &'static str, status: u16, body: impl Into<String>) -> Self {
        Self {
            endpoint,
            status,
            body: body.into(),
            payload: PhantomData,
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl<T: DeserializeOwned> HttpReply<T> {
    /// Parse the body as a response envelope. Never defaults a malformed body.
    pub fn envelope(&self) -> Result<ResponseEnvelope<T>, HarnessError> {
        serde_json::from_str(&self.body).map_err(|source| HarnessError::Decode {
            endpoint: self.endpoint,
            source,
        })
    }
}

/// Client for the identity service endpoints.
///
/// Implementations return `Err` only for transport failures; every HTTP
/// status, including 4xx and 5xx, comes back as an `HttpReply`.
#[async_trait]
pub trait IdentityApi: Send + Sync {
    /// POST /api/user/identity/register
    async fn register(&self, user: &User) -> Result<HttpReply<TokenPayload>, HarnessError>;

    /// POST /api/user/identity/login-email
    async fn login(&self, request: &LoginRequest) -> Result<HttpReply<TokenPayload>, HarnessError>;

    /// GET /api/user/identity/login-email?email=...
    async fn lookup_by_email(&self, email: &str) -> Result<HttpReply<Value>, HarnessError>;

    /// POST /api/identity/token/refresh
    async fn refresh(
        &self,
        request: &RefreshTokenRequest,
    ) -> Result<HttpReply<TokenPayload>, HarnessError>;

    /// GET /api/user/profile. `None` sends no Authorization header.
    async fn profile(
        &self,
        bearer: Option<&str>,
    ) -> Result<HttpReply<UserProfilePayload>, HarnessError>;

    /// PUT /api/user/profile. `None` sends no Authorization header.
    async fn update_profile(
        &self,
        bearer: Option<&str>,
        request: &UpdateProfileRequest,
    ) -> Result<HttpReply<UserProfilePayload>, HarnessError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_decode_error_names_endpoint() {
        let reply: HttpReply<TokenPayload> = HttpReply::new("register", 200, "<html>oops</html>");
        match reply.envelope() {
            Err(HarnessError::Decode { endpoint, .. }) => assert_eq!(endpoint, "register"),
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn test_transport_status_is_independent_of_envelope() {
        let reply: HttpReply<TokenPayload> =
            HttpReply::new("login", 200, r#"{ "isSuccess": false, "statusCode": 401 }"#);
        assert!(reply.is_success());
        let envelope = reply.envelope().unwrap();
        assert!(!envelope.is_success);
        assert_eq!(envelope.status_code, 401);
    }
}
