//! Tracing sink adapter
//!
//! Routes registry output into the structured log stream instead of a
//! terminal.

use crate::domain::SinkError;
use crate::ports::outbound::OutputSink;
use tracing::info;

/// Forwards each line as an `info` event.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl OutputSink for TracingSink {
    fn emit(&self, line: &str) -> Result<(), SinkError> {
        info!(target: "hms_registry::sink", line = %line, "registry output");
        Ok(())
    }
}
