//! # Identity Core
//!
//! The domain layer of the identity harness.
//! Holds the synthetic user model, the ports the harness talks through, and
//! the registration fixture built on top of them. No transport code lives here.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use error::{DomainError, HarnessError};
pub use services::RegistrationFixture;
