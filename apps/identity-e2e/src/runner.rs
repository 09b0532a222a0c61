//! Scenario runner - executes scenarios one at a time and collects outcomes.

use std::time::{Duration, Instant};

use crate::harness::Harness;
use crate::scenarios::Scenario;

/// Outcome of a single scenario.
#[derive(Debug, Clone)]
pub struct ScenarioOutcome {
    pub name: &'static str,
    pub elapsed: Duration,
    /// `None` when the scenario passed.
    pub failure: Option<String>,
}

impl ScenarioOutcome {
    pub fn passed(&self) -> bool {
        self.failure.is_none()
    }
}

/// Outcomes of a run, in execution order.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub outcomes: Vec<ScenarioOutcome>,
}

impl RunReport {
    pub fn passed(&self) -> impl Iterator<Item = &ScenarioOutcome> {
        self.outcomes.iter().filter(|o| o.passed())
    }

    pub fn failed(&self) -> impl Iterator<Item = &ScenarioOutcome> {
        self.outcomes.iter().filter(|o| !o.passed())
    }

    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(ScenarioOutcome::passed)
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

/// Whole milliseconds, saturating at `u64::MAX`.
fn millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

/// Run every scenario whose name contains `filter` (all of them when `None`).
///
/// Each scenario runs to completion before the next starts; failures are
/// recorded and never stop the run.
pub async fn run_scenarios(
    harness: &Harness,
    scenarios: &[Scenario],
    filter: Option<&str>,
) -> RunReport {
    let mut report = RunReport::default();

    for scenario in scenarios
        .iter()
        .filter(|s| filter.is_none_or(|f| s.name.contains(f)))
    {
        let started = Instant::now();
        let result = (scenario.run)(harness).await;
        let elapsed = started.elapsed();

        let failure = match result {
            Ok(()) => {
                tracing::info!(
                    scenario = scenario.name,
                    elapsed_ms = millis(elapsed),
                    "Scenario passed"
                );
                None
            }
            Err(e) => {
                tracing::error!(
                    scenario = scenario.name,
                    elapsed_ms = millis(elapsed),
                    error = %e,
                    "Scenario failed"
                );
                Some(e.to_string())
            }
        };

        report.outcomes.push(ScenarioOutcome {
            name: scenario.name,
            elapsed,
            failure,
        });
    }

    tracing::info!(
        passed = report.passed().count(),
        failed = report.failed().count(),
        "Run complete"
    );

    report
}
