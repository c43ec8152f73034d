//! # HMS Telemetry
//!
//! Structured logging setup for the registry workspace.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use hms_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() {
//!     let _guard = init_telemetry(TelemetryConfig::from_env()).expect("Failed to init telemetry");
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `OTEL_SERVICE_NAME` | `hms-registry` | Service name in logs |
//! | `HMS_LOG_LEVEL` | `info` | Log level filter |
//! | `HMS_JSON_LOGS` | `false` | JSON log lines |
//! | `HMS_CONSOLE_OUTPUT` | `true` | Write logs to stderr |

#![warn(missing_docs)]

mod config;
mod tracing_setup;

pub use config::TelemetryConfig;
pub use tracing_setup::build_filter;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// Global subscriber could not be installed (usually already set).
    #[error("Failed to initialize tracing subscriber: {0}")]
    SubscriberInit(String),

    /// Level filter did not parse.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Initialize logging.
///
/// Returns a guard to hold for the lifetime of the application; dropping it
/// logs the shutdown.
pub fn init_telemetry(config: TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    tracing_setup::init_tracing(&config)?;

    Ok(TelemetryGuard {
        service_name: config.service_name,
    })
}

/// Guard that marks the telemetry lifetime.
pub struct TelemetryGuard {
    service_name: String,
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        tracing::info!(service = %self.service_name, "Shutting down telemetry...");
    }
}
