//! HTTP transport for the identity service.

mod client;

pub use client::{HttpClientConfig, HttpIdentityClient};
