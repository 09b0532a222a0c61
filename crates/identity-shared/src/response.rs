//! Standardized response envelope returned by every identity endpoint.

use serde::{Deserialize, Serialize};

/// Envelope wrapping every JSON body the identity service returns.
///
/// `is_success` and `status_code` are the server's own verdict as written in
/// the body. They are kept apart from the HTTP status of the transport, which
/// callers check separately. Both fields are required: a body without them
/// fails to deserialize instead of producing a defaulted envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope<T> {
    #[serde(alias = "IsSuccess")]
    pub is_success: bool,
    #[serde(alias = "StatusCode")]
    pub status_code: u16,
    /// Absent or `null` on failure responses.
    #[serde(alias = "Data")]
    pub data: Option<T>,
}

impl<T> ResponseEnvelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            is_success: true,
            status_code: 200,
            data: Some(data),
        }
    }

    pub fn failure(status_code: u16) -> Self {
        Self {
            is_success: false,
            status_code,
            data: None,
        }
    }

    /// Payload of a successful envelope. `None` when the server reported a
    /// failure or sent no data.
    pub fn into_success_data(self) -> Option<T> {
        if self.is_success { self.data } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::TokenPayload;

    #[test]
    fn test_parses_success_envelope() {
        let body = r#"{
            "isSuccess": true,
            "statusCode": 200,
            "data": { "accessToken": "a", "refreshToken": "r", "expiresIn": 3600 }
        }"#;

        let envelope: ResponseEnvelope<TokenPayload> = serde_json::from_str(body).unwrap();
        assert!(envelope.is_success);
        assert_eq!(envelope.status_code, 200);
        let data = envelope.into_success_data().unwrap();
        assert_eq!(data.access_token, "a");
        assert_eq!(data.expires_in, 3600);
    }

    #[test]
    fn test_failure_envelope_has_no_data() {
        let body = r#"{ "isSuccess": false, "statusCode": 400, "data": null }"#;
        let envelope: ResponseEnvelope<TokenPayload> = serde_json::from_str(body).unwrap();
        assert!(!envelope.is_success);
        assert!(envelope.data.is_none());

        let body = r#"{ "isSuccess": false, "statusCode": 401 }"#;
        let envelope: ResponseEnvelope<TokenPayload> = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.status_code, 401);
        assert!(envelope.into_success_data().is_none());
    }

    #[test]
    fn test_accepts_pascal_case_flag() {
        let body = r#"{ "IsSuccess": true, "StatusCode": 200, "Data": null }"#;
        let envelope: ResponseEnvelope<TokenPayload> = serde_json::from_str(body).unwrap();
        assert!(envelope.is_success);
    }

    #[test]
    fn test_missing_flag_is_an_error() {
        let body = r#"{ "statusCode": 200, "data": null }"#;
        assert!(serde_json::from_str::<ResponseEnvelope<TokenPayload>>(body).is_err());
    }

    #[test]
    fn test_malformed_payload_is_an_error() {
        let body = r#"{ "isSuccess": true, "statusCode": 200, "data": { "accessToken": 1 } }"#;
        assert!(serde_json::from_str::<ResponseEnvelope<TokenPayload>>(body).is_err());
    }
}
