//! In-memory account store and request handling of the stub backend.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use serde_json::json;
use wiremock::{Request, ResponseTemplate};

use identity_core::domain::User;
use identity_shared::{
    LoginRequest, RefreshTokenRequest, ResponseEnvelope, TokenPayload, UpdateProfileRequest,
    UserProfilePayload,
};

use super::token::StubTokenIssuer;

/// Minimum password length accepted at registration.
const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone)]
pub(crate) struct Account {
    pub password: String,
    pub display_name: String,
    pub gender: String,
    pub country_key: String,
}

impl Account {
    fn profile(&self, email: &str) -> UserProfilePayload {
        UserProfilePayload {
            username: email.to_string(),
            display_name: self.display_name.clone(),
            gender: self.gender.clone(),
            country_key: self.country_key.clone(),
        }
    }
}

/// Shared state behind every stub route.
pub(crate) struct StubState {
    accounts: Mutex<HashMap<String, Account>>,
    /// refresh token -> email
    refresh_tokens: Mutex<HashMap<String, String>>,
    tokens: StubTokenIssuer,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn envelope<T: Serialize>(status: u16, envelope: ResponseEnvelope<T>) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(envelope)
}

fn rejected(status: u16) -> ResponseTemplate {
    envelope::<TokenPayload>(status, ResponseEnvelope::failure(status))
}

/// ASP.NET-style bearer challenge: 401 with no body.
fn challenge() -> ResponseTemplate {
    ResponseTemplate::new(401)
}

fn bearer(request: &Request) -> Option<&str> {
    request
        .headers
        .get("authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

impl StubState {
    pub fn new(tokens: StubTokenIssuer) -> Self {
        Self {
            accounts: Mutex::new(HashMap::new()),
            refresh_tokens: Mutex::new(HashMap::new()),
            tokens,
        }
    }

    pub fn seed(&self, email: &str, account: Account) {
        lock(&self.accounts).insert(email.to_string(), account);
    }

    pub fn account_count(&self) -> usize {
        lock(&self.accounts).len()
    }

    /// Issue tokens and remember the refresh token.
    fn grant(&self, email: &str) -> ResponseTemplate {
        match self.tokens.issue(email) {
            Ok(tokens) => {
                lock(&self.refresh_tokens).insert(tokens.refresh_token.clone(), email.to_string());
                envelope(200, ResponseEnvelope::ok(tokens))
            }
            Err(e) => {
                tracing::error!(error = %e, "Stub failed to sign access token");
                rejected(500)
            }
        }
    }

    /// Email of the account the request's bearer token belongs to.
    fn authenticate(&self, request: &Request) -> Option<String> {
        let email = self.tokens.validate(bearer(request)?)?;
        lock(&self.accounts).contains_key(&email).then_some(email)
    }

    pub fn register(&self, request: &Request) -> ResponseTemplate {
        // Deserializing a User rejects a confirmPassword mismatch.
        let Ok(user) = request.body_json::<User>() else {
            return rejected(400);
        };

        if !user.email().contains('@') || user.password().len() < MIN_PASSWORD_LEN {
            return rejected(400);
        }

        {
            let mut accounts = lock(&self.accounts);
            if accounts.contains_key(user.email()) {
                tracing::debug!(email = %user.email(), "Stub rejected duplicate registration");
                return rejected(400);
            }
            accounts.insert(
                user.email().to_string(),
                Account {
                    password: user.password().to_string(),
                    display_name: user.display_name().to_string(),
                    gender: user.gender().to_string(),
                    country_key: user.country_key().to_string(),
                },
            );
        }

        self.grant(user.email())
    }

    pub fn login(&self, request: &Request) -> ResponseTemplate {
        let Ok(login) = request.body_json::<LoginRequest>() else {
            return rejected(400);
        };

        let valid = lock(&self.accounts)
            .get(&login.email)
            .is_some_and(|account| account.password == login.password);

        if valid {
            self.grant(&login.email)
        } else {
            rejected(401)
        }
    }

    pub fn lookup(&self, request: &Request) -> ResponseTemplate {
        let email = request
            .url
            .query_pairs()
            .find(|(key, _)| key == "email")
            .map(|(_, value)| value.into_owned());

        let Some(email) = email else {
            return rejected(400);
        };

        if lock(&self.accounts).contains_key(&email) {
            envelope(200, ResponseEnvelope::ok(json!({ "email": email })))
        } else {
            rejected(404)
        }
    }

    pub fn refresh(&self, request: &Request) -> ResponseTemplate {
        let Ok(body) = request.body_json::<RefreshTokenRequest>() else {
            return rejected(400);
        };

        // Refresh tokens are single use.
        let owner = lock(&self.refresh_tokens).remove(&body.refresh_token);
        match owner {
            Some(email) => self.grant(&email),
            None => rejected(401),
        }
    }

    pub fn profile(&self, request: &Request) -> ResponseTemplate {
        let Some(email) = self.authenticate(request) else {
            return challenge();
        };

        match lock(&self.accounts).get(&email) {
            Some(account) => envelope(200, ResponseEnvelope::ok(account.profile(&email))),
            None => challenge(),
        }
    }

    pub fn update_profile(&self, request: &Request) -> ResponseTemplate {
        let Some(email) = self.authenticate(request) else {
            return challenge();
        };
        let Ok(update) = request.body_json::<UpdateProfileRequest>() else {
            return rejected(400);
        };

        let mut accounts = lock(&self.accounts);
        let Some(account) = accounts.get_mut(&email) else {
            return challenge();
        };

        if let Some(display_name) = update.display_name {
            account.display_name = display_name;
        }
        if let Some(gender) = update.gender {
            account.gender = gender;
        }
        if let Some(country_key) = update.country_key {
            account.country_key = country_key;
        }

        envelope(200, ResponseEnvelope::ok(account.profile(&email)))
    }
}
