//! In-process identity backend for tests.
//!
//! A wiremock server whose responders keep real state: registered accounts,
//! signed access tokens and single-use refresh tokens. It answers every
//! endpoint the harness calls with the same envelopes and statuses the live
//! service uses, so scenarios can run without a network dependency.

mod routes;
mod state;
mod token;

use std::sync::Arc;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer};

use identity_shared::routes as paths;

use routes::{Endpoint, StubRoute};
use state::{Account, StubState};

pub use token::{StubTokenConfig, StubTokenIssuer};

/// Account present before any registration, for conflict and login checks.
pub const SEEDED_EMAIL: &str = "mari.doe@example.com";
pub const SEEDED_PASSWORD: &str = "Password123";
pub const SEEDED_DISPLAY_NAME: &str = "Mari Doe";

/// Running stub backend. Shuts down when dropped.
pub struct StubIdentityBackend {
    server: MockServer,
    state: Arc<StubState>,
}

impl StubIdentityBackend {
    /// Start with default token settings and the seeded account.
    pub async fn start() -> Self {
        Self::start_with(StubTokenConfig::default()).await
    }

    pub async fn start_with(config: StubTokenConfig) -> Self {
        let state = Arc::new(StubState::new(StubTokenIssuer::new(config)));
        state.seed(
            SEEDED_EMAIL,
            Account {
                password: SEEDED_PASSWORD.to_string(),
                display_name: SEEDED_DISPLAY_NAME.to_string(),
                gender: "Female".to_string(),
                country_key: "UK".to_string(),
            },
        );

        let server = MockServer::start().await;
        let routes = [
            ("POST", paths::REGISTER, Endpoint::Register),
            ("POST", paths::LOGIN_EMAIL, Endpoint::Login),
            ("GET", paths::LOGIN_EMAIL, Endpoint::Lookup),
            ("POST", paths::TOKEN_REFRESH, Endpoint::Refresh),
            ("GET", paths::PROFILE, Endpoint::Profile),
            ("PUT", paths::PROFILE, Endpoint::UpdateProfile),
        ];
        for (verb, route, endpoint) in routes {
            Mock::given(method(verb))
                .and(path(route))
                .respond_with(StubRoute::new(endpoint, state.clone()))
                .mount(&server)
                .await;
        }

        tracing::debug!(uri = %server.uri(), "Stub identity backend started");

        Self { server, state }
    }

    /// Base URL to point the harness at.
    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Number of accounts, seeded one included.
    pub fn account_count(&self) -> usize {
        self.state.account_count()
    }
}
