//! # Outbound Ports
//!
//! The output sink the registry writes notices and listings to.

use crate::domain::SinkError;

/// Output sink - outbound port.
///
/// Receives one human-readable line per call, without trailing newline.
pub trait OutputSink: Send + Sync {
    /// Write a single line.
    fn emit(&self, line: &str) -> Result<(), SinkError>;
}

impl<T: OutputSink + ?Sized> OutputSink for std::sync::Arc<T> {
    fn emit(&self, line: &str) -> Result<(), SinkError> {
        (**self).emit(line)
    }
}

/// Sink that discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl OutputSink for NullSink {
    fn emit(&self, _line: &str) -> Result<(), SinkError> {
        Ok(())
    }
}
