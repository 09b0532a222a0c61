//! reqwest implementation of the identity service port.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde_json::Value;

use identity_core::HarnessError;
use identity_core::domain::User;
use identity_core::ports::{HttpReply, IdentityApi};
use identity_shared::routes;
use identity_shared::{
    LoginRequest, RefreshTokenRequest, TokenPayload, UpdateProfileRequest, UserProfilePayload,
};

/// HTTP client configuration.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Scheme, host and optional port, without a trailing slash.
    pub base_url: String,
    /// Per-request timeout. `None` keeps reqwest's default.
    pub timeout: Option<Duration>,
}

impl HttpClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Identity service client over reqwest.
pub struct HttpIdentityClient {
    base_url: String,
    client: Client,
}

impl HttpIdentityClient {
    pub fn new(config: HttpClientConfig) -> Result<Self, HarnessError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| HarnessError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: config.base_url,
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send the request and capture status and body without interpreting them.
    async fn execute<T>(
        &self,
        endpoint: &'static str,
        request: RequestBuilder,
    ) -> Result<HttpReply<T>, HarnessError> {
        let transport = |e: reqwest::Error| HarnessError::Transport {
            endpoint,
            message: e.to_string(),
        };

        let response = request.send().await.map_err(transport)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport)?;

        tracing::debug!(endpoint, status, bytes = body.len(), "Identity API call completed");

        Ok(HttpReply::new(endpoint, status, body))
    }
}

fn with_bearer(request: RequestBuilder, bearer: Option<&str>) -> RequestBuilder {
    match bearer {
        Some(token) => request.bearer_auth(token),
        None => request,
    }
}

#[async_trait]
impl IdentityApi for HttpIdentityClient {
    async fn register(&self, user: &User) -> Result<HttpReply<TokenPayload>, HarnessError> {
        let request = self.client.post(self.url(routes::REGISTER)).json(user);
        self.execute("register", request).await
    }

    async fn login(&self, request: &LoginRequest) -> Result<HttpReply<TokenPayload>, HarnessError> {
        let request = self.client.post(self.url(routes::LOGIN_EMAIL)).json(request);
        self.execute("login", request).await
    }

    async fn lookup_by_email(&self, email: &str) -> Result<HttpReply<Value>, HarnessError> {
        let request = self
            .client
            .get(self.url(routes::LOGIN_EMAIL))
            .query(&[("email", email)]);
        self.execute("lookup_by_email", request).await
    }

    async fn refresh(
        &self,
        request: &RefreshTokenRequest,
    ) -> Result<HttpReply<TokenPayload>, HarnessError> {
        let request = self.client.post(self.url(routes::TOKEN_REFRESH)).json(request);
        self.execute("refresh", request).await
    }

    async fn profile(
        &self,
        bearer: Option<&str>,
    ) -> Result<HttpReply<UserProfilePayload>, HarnessError> {
        let request = with_bearer(self.client.get(self.url(routes::PROFILE)), bearer);
        self.execute("profile", request).await
    }

    async fn update_profile(
        &self,
        bearer: Option<&str>,
        request: &UpdateProfileRequest,
    ) -> Result<HttpReply<UserProfilePayload>, HarnessError> {
        let request = with_bearer(self.client.put(self.url(routes::PROFILE)), bearer).json(request);
        self.execute("update_profile", request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use identity_core::domain::Gender;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> HttpIdentityClient {
        HttpIdentityClient::new(HttpClientConfig::new(format!("{}/", server.uri()))).unwrap()
    }

    #[tokio::test]
    async fn test_register_posts_user_as_camel_case_json() {
        let server = MockServer::start().await;
        let user = User::new(
            "jo@example.com",
            "Password123",
            "Jo March",
            Gender::Female,
            vec!["books".to_string(), "tea".to_string()],
            "France",
        );

        Mock::given(method("POST"))
            .and(path(routes::REGISTER))
            .and(body_json(json!({
                "email": "jo@example.com",
                "password": "Password123",
                "confirmPassword": "Password123",
                "displayName": "Jo March",
                "gender": "Female",
                "preferredCategoryKeys": ["books", "tea"],
                "countryKey": "France"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "isSuccess": true,
                "statusCode": 200,
                "data": { "accessToken": "a", "refreshToken": "r", "expiresIn": 60 }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let reply = client_for(&server).register(&user).await.unwrap();

        assert_eq!(reply.status, 200);
        assert_eq!(reply.envelope().unwrap().data.unwrap().refresh_token, "r");
    }

    #[tokio::test]
    async fn test_rejections_are_replies_not_errors() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(routes::LOGIN_EMAIL))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let reply = client_for(&server)
            .login(&LoginRequest::new("nobody@example.com", "nope"))
            .await
            .unwrap();

        assert_eq!(reply.status, 401);
        assert!(reply.body.is_empty());
    }

    #[tokio::test]
    async fn test_profile_sends_bearer_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(routes::PROFILE))
            .and(header("authorization", "Bearer tok-123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "isSuccess": true,
                "statusCode": 200,
                "data": {
                    "username": "jo@example.com",
                    "displayName": "Jo March",
                    "gender": "Female",
                    "countryKey": "France"
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let reply = client_for(&server).profile(Some("tok-123")).await.unwrap();
        assert_eq!(reply.envelope().unwrap().data.unwrap().display_name, "Jo March");
    }

    #[tokio::test]
    async fn test_profile_without_bearer_sends_no_authorization() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(routes::PROFILE))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        client_for(&server).profile(None).await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert!(!requests[0].headers.contains_key("authorization"));
    }

    #[tokio::test]
    async fn test_lookup_passes_email_as_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(routes::LOGIN_EMAIL))
            .and(query_param("email", "a+b@example.com"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;

        let reply = client_for(&server)
            .lookup_by_email("a+b@example.com")
            .await
            .unwrap();
        assert_eq!(reply.status, 404);
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_transport_error() {
        // Port 9 (discard) is not expected to accept HTTP connections.
        let client = HttpIdentityClient::new(HttpClientConfig::new("http://127.0.0.1:9")).unwrap();
        let err = client
            .refresh(&RefreshTokenRequest::new("whatever"))
            .await
            .unwrap_err();
        assert!(matches!(err, HarnessError::Transport { endpoint: "refresh", .. }));
    }
}
