//! Ports - trait definitions for the harness's external collaborators.
//! Infrastructure provides the concrete HTTP client and data generator.

mod identity_api;
mod user_factory;

pub use identity_api::{HttpReply, IdentityApi};
pub use user_factory::UserFactory;
