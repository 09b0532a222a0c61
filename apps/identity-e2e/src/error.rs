//! Scenario-level error type.

use identity_core::HarnessError;
use thiserror::Error;

/// Why a scenario failed.
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// Setup or transport broke before the scenario could assert anything.
    #[error(transparent)]
    Harness(#[from] HarnessError),

    /// The backend answered, but not as the contract requires.
    #[error("Assertion failed: {0}")]
    Assertion(String),
}

/// Result type alias for scenarios.
pub type ScenarioResult = Result<(), ScenarioError>;
