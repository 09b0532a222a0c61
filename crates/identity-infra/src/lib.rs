//! # Identity Infrastructure
//!
//! Concrete implementations of the ports defined in `identity-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - HTTP client and synthetic user generator
//! - `minimal` - No external dependencies
//! - `http` - reqwest-backed `IdentityApi`
//! - `faker` - `fake`-backed `UserFactory`
//! - `stub` - In-process wiremock backend honouring the identity wire contract

#[cfg(feature = "faker")]
pub mod faker;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "stub")]
pub mod stub;

#[cfg(feature = "faker")]
pub use faker::FakeUserFactory;

#[cfg(feature = "http")]
pub use http::{HttpClientConfig, HttpIdentityClient};

#[cfg(feature = "stub")]
pub use stub::StubIdentityBackend;
