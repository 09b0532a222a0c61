//! Binds stub handlers to wiremock.

use std::sync::Arc;

use wiremock::{Request, Respond, ResponseTemplate};

use super::state::StubState;

#[derive(Debug, Clone, Copy)]
pub(crate) enum Endpoint {
    Register,
    Login,
    Lookup,
    Refresh,
    Profile,
    UpdateProfile,
}

/// One mounted endpoint. All endpoints share the same state.
pub(crate) struct StubRoute {
    endpoint: Endpoint,
    state: Arc<StubState>,
}

impl StubRoute {
    pub fn new(endpoint: Endpoint, state: Arc<StubState>) -> Self {
        Self { endpoint, state }
    }
}

impl Respond for StubRoute {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        match self.endpoint {
            Endpoint::Register => self.state.register(request),
            Endpoint::Login => self.state.login(request),
            Endpoint::Lookup => self.state.lookup(request),
            Endpoint::Refresh => self.state.refresh(request),
            Endpoint::Profile => self.state.profile(request),
            Endpoint::UpdateProfile => self.state.update_profile(request),
        }
    }
}
