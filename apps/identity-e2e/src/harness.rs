//! Harness - everything a scenario needs, shared read-only across scenarios.

use std::sync::Arc;

use identity_core::HarnessError;
use identity_core::RegistrationFixture;
use identity_core::ports::{IdentityApi, UserFactory};
use identity_infra::{FakeUserFactory, HttpClientConfig, HttpIdentityClient};

use crate::config::HarnessConfig;

/// Client, fixture and configuration for one run.
#[derive(Clone)]
pub struct Harness {
    api: Arc<dyn IdentityApi>,
    fixture: RegistrationFixture,
    config: HarnessConfig,
}

impl Harness {
    /// Build a harness talking HTTP to `config.base_url` with random users.
    pub fn connect(config: HarnessConfig) -> Result<Self, HarnessError> {
        let mut http = HttpClientConfig::new(config.base_url.clone());
        if let Some(timeout) = config.request_timeout {
            http = http.with_timeout(timeout);
        }

        let api: Arc<dyn IdentityApi> = Arc::new(HttpIdentityClient::new(http)?);
        let factory: Arc<dyn UserFactory> = Arc::new(FakeUserFactory::new());

        Ok(Self::from_parts(api, factory, config))
    }

    pub fn from_parts(
        api: Arc<dyn IdentityApi>,
        factory: Arc<dyn UserFactory>,
        config: HarnessConfig,
    ) -> Self {
        let fixture = RegistrationFixture::new(api.clone(), factory);
        Self {
            api,
            fixture,
            config,
        }
    }

    pub fn api(&self) -> &dyn IdentityApi {
        self.api.as_ref()
    }

    pub fn fixture(&self) -> &RegistrationFixture {
        &self.fixture
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }
}
