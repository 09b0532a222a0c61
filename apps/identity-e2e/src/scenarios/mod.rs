//! Scenario catalogue.
//!
//! Every scenario is a linear arrange → act → assert sequence. Scenarios
//! share nothing but the read-only `Harness`; any user one needs, it registers
//! itself through the fixture.

mod check;
pub mod identity;
pub mod profile;

use futures::future::BoxFuture;

use crate::error::ScenarioResult;
use crate::harness::Harness;

pub type ScenarioFn = for<'a> fn(&'a Harness) -> BoxFuture<'a, ScenarioResult>;

/// A named, runnable scenario.
#[derive(Clone, Copy)]
pub struct Scenario {
    pub name: &'static str,
    pub run: ScenarioFn,
}

impl Scenario {
    pub const fn new(name: &'static str, run: ScenarioFn) -> Self {
        Self { name, run }
    }
}

/// All scenarios, identity flows first.
pub fn catalogue() -> Vec<Scenario> {
    vec![
        Scenario::new("register_fresh_user", |h| {
            Box::pin(identity::register_fresh_user(h))
        }),
        Scenario::new("register_existing_email_is_rejected", |h| {
            Box::pin(identity::register_existing_email_is_rejected(h))
        }),
        Scenario::new("login_known_user", |h| Box::pin(identity::login_known_user(h))),
        Scenario::new("login_registered_user", |h| {
            Box::pin(identity::login_registered_user(h))
        }),
        Scenario::new("login_wrong_password_is_unauthorized", |h| {
            Box::pin(identity::login_wrong_password_is_unauthorized(h))
        }),
        Scenario::new("login_unknown_email_is_unauthorized", |h| {
            Box::pin(identity::login_unknown_email_is_unauthorized(h))
        }),
        Scenario::new("lookup_registered_email", |h| {
            Box::pin(identity::lookup_registered_email(h))
        }),
        Scenario::new("lookup_unknown_email_is_not_found", |h| {
            Box::pin(identity::lookup_unknown_email_is_not_found(h))
        }),
        Scenario::new("refresh_issued_token", |h| {
            Box::pin(identity::refresh_issued_token(h))
        }),
        Scenario::new("refresh_invalid_token_is_unauthorized", |h| {
            Box::pin(identity::refresh_invalid_token_is_unauthorized(h))
        }),
        Scenario::new("profile_echoes_registered_user", |h| {
            Box::pin(profile::profile_echoes_registered_user(h))
        }),
        Scenario::new("profile_with_invalid_token_is_unauthorized", |h| {
            Box::pin(profile::profile_with_invalid_token_is_unauthorized(h))
        }),
        Scenario::new("profile_without_token_is_unauthorized", |h| {
            Box::pin(profile::profile_without_token_is_unauthorized(h))
        }),
        Scenario::new("update_profile_display_name", |h| {
            Box::pin(profile::update_profile_display_name(h))
        }),
        Scenario::new("update_profile_without_token_is_unauthorized", |h| {
            Box::pin(profile::update_profile_without_token_is_unauthorized(h))
        }),
        Scenario::new("update_profile_with_invalid_token_is_unauthorized", |h| {
            Box::pin(profile::update_profile_with_invalid_token_is_unauthorized(h))
        }),
    ]
}
