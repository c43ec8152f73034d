//! In-memory sink adapter.

use crate::domain::SinkError;
use crate::ports::outbound::OutputSink;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};

/// Collects emitted lines in memory.
///
/// Useful for tests and for callers that render the output themselves.
#[derive(Default)]
pub struct MemorySink {
    lines: RwLock<Vec<String>>,
    closed: AtomicBool,
}

impl MemorySink {
    /// Create an empty, open sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every line emitted so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.read().clone()
    }

    /// Remove and return every line emitted so far.
    pub fn drain(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.write())
    }

    /// Reject all further output with `SinkError::Closed`.
    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }

    /// Whether `close` has been called.
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

impl OutputSink for MemorySink {
    fn emit(&self, line: &str) -> Result<(), SinkError> {
        if self.is_closed() {
            return Err(SinkError::Closed);
        }
        self.lines.write().push(line.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_in_order() {
        let sink = MemorySink::new();
        sink.emit("first").unwrap();
        sink.emit("second").unwrap();
        assert_eq!(sink.lines(), vec!["first", "second"]);
    }

    #[test]
    fn test_drain_empties() {
        let sink = MemorySink::new();
        sink.emit("first").unwrap();
        assert_eq!(sink.drain(), vec!["first"]);
        assert!(sink.lines().is_empty());
    }

    #[test]
    fn test_closed_sink_rejects() {
        let sink = MemorySink::new();
        sink.close();
        assert!(matches!(sink.emit("late"), Err(SinkError::Closed)));
        assert!(sink.lines().is_empty());
    }
}
