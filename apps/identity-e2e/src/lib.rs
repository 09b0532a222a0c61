//! # Identity E2E
//!
//! End-to-end scenarios for the identity service: registration, login,
//! lookup, token refresh and profile. Scenarios run against whatever base URL
//! the configuration points at; the `identity-e2e` binary runs the whole
//! catalogue and exits non-zero on any failure.

pub mod config;
pub mod error;
pub mod harness;
pub mod runner;
pub mod scenarios;
pub mod telemetry;

pub use config::HarnessConfig;
pub use error::{ScenarioError, ScenarioResult};
pub use harness::Harness;
pub use runner::{RunReport, run_scenarios};
