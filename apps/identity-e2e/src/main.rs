//! # Identity E2E runner
//!
//! Runs the scenario catalogue against the configured identity service.

use anyhow::bail;

use identity_e2e::telemetry::{TelemetryConfig, init_telemetry};
use identity_e2e::{Harness, HarnessConfig, run_scenarios, scenarios};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_telemetry(&TelemetryConfig::from_env());

    let config = HarnessConfig::from_env()?;
    tracing::info!(base_url = %config.base_url, "Starting identity e2e run");

    let harness = Harness::connect(config)?;
    let filter = harness.config().scenario_filter.clone();

    let report = run_scenarios(&harness, &scenarios::catalogue(), filter.as_deref()).await;

    if report.is_empty() {
        bail!("No scenario matched filter {:?}", filter);
    }
    if !report.all_passed() {
        let failed: Vec<&str> = report.failed().map(|o| o.name).collect();
        bail!("{} scenario(s) failed: {}", failed.len(), failed.join(", "));
    }

    Ok(())
}
