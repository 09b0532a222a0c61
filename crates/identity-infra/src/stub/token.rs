//! JWT access tokens and opaque refresh tokens issued by the stub backend.

use chrono::{TimeDelta, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use identity_shared::TokenPayload;

/// Token issuer configuration.
#[derive(Debug, Clone)]
pub struct StubTokenConfig {
    pub secret: String,
    pub expiration_seconds: i64,
    pub issuer: String,
}

impl Default for StubTokenConfig {
    fn default() -> Self {
        Self {
            secret: "identity-stub-secret".to_string(),
            expiration_seconds: 3600,
            issuer: "identity-stub".to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String, // email
    jti: String, // unique per token, so reissues never collide
    exp: i64,
    iat: i64,
    iss: String,
}

/// Signs and validates HS256 access tokens.
pub struct StubTokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    config: StubTokenConfig,
}

impl StubTokenIssuer {
    pub fn new(config: StubTokenConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            encoding_key,
            decoding_key,
            config,
        }
    }

    /// Issue an access/refresh pair for `email`.
    pub fn issue(&self, email: &str) -> Result<TokenPayload, jsonwebtoken::errors::Error> {
        let now = Utc::now();
        let exp = now + TimeDelta::seconds(self.config.expiration_seconds);

        let claims = Claims {
            sub: email.to_string(),
            jti: Uuid::new_v4().to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
            iss: self.config.issuer.clone(),
        };
        let access_token = encode(&Header::default(), &claims, &self.encoding_key)?;

        Ok(TokenPayload {
            access_token,
            refresh_token: Uuid::new_v4().simple().to_string(),
            expires_in: self.config.expiration_seconds,
        })
    }

    /// Email the access token was issued for, or `None` if it does not verify.
    pub fn validate(&self, token: &str) -> Option<String> {
        let mut validation = Validation::default();
        validation.set_issuer(&[&self.config.issuer]);

        match decode::<Claims>(token, &self.decoding_key, &validation) {
            Ok(data) => Some(data.claims.sub),
            Err(e) => {
                tracing::debug!(error = %e, "Rejected access token");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issuer(name: &str) -> StubTokenIssuer {
        StubTokenIssuer::new(StubTokenConfig {
            secret: "same-secret".to_string(),
            expiration_seconds: 60,
            issuer: name.to_string(),
        })
    }

    #[test]
    fn test_issued_token_validates_to_email() {
        let issuer = issuer("test-issuer");
        let tokens = issuer.issue("test@example.com").unwrap();

        assert_eq!(tokens.expires_in, 60);
        assert!(!tokens.refresh_token.is_empty());
        assert_eq!(
            issuer.validate(&tokens.access_token).as_deref(),
            Some("test@example.com")
        );
    }

    #[test]
    fn test_reissue_yields_distinct_tokens() {
        let issuer = issuer("test-issuer");
        let first = issuer.issue("test@example.com").unwrap();
        let second = issuer.issue("test@example.com").unwrap();

        assert_ne!(first.access_token, second.access_token);
        assert_ne!(first.refresh_token, second.refresh_token);
    }

    #[test]
    fn test_rejects_garbage_and_foreign_issuer() {
        let ours = issuer("issuer1");
        let theirs = issuer("issuer2");
        let token = theirs.issue("test@test.com").unwrap().access_token;

        assert!(ours.validate("invalid-token").is_none());
        assert!(ours.validate(&token).is_none());
    }
}
