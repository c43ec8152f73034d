//! # HMS Runtime
//!
//! Entry point: runs the demonstration session against stdout.

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::{error, info};

use hms_registry::{RegistryConfig, RegistryService, WriterSink};
use hms_runtime::run_demo_session;
use hms_telemetry::{init_telemetry, TelemetryConfig};

fn main() -> Result<()> {
    let _telemetry = init_telemetry(TelemetryConfig::from_env())
        .context("Failed to initialize telemetry")?;

    let config = RegistryConfig::from_env();
    info!(
        announce_mutations = config.announce_mutations,
        list_headers = config.list_headers,
        "Starting HMS registry v{}",
        hms_registry::VERSION
    );

    let mut registry = RegistryService::with_config(WriterSink::stdout(), config);

    run_demo_session(&mut registry, Utc::now())
        .map_err(|e| {
            error!(error = %e, "Session aborted");
            e
        })
        .context("Demo session failed")?;

    Ok(())
}
