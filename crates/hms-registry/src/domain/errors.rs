//! # Domain Errors
//!
//! Registry operations never reject input. The only failure path is the
//! output sink refusing a line.

use thiserror::Error;

/// Errors raised by an output sink.
#[derive(Debug, Error)]
pub enum SinkError {
    /// Underlying writer failed.
    #[error("Sink write failed: {0}")]
    Io(#[from] std::io::Error),

    /// Sink no longer accepts output.
    #[error("Sink closed")]
    Closed,
}

/// Registry error types.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A notice or listing line could not be written.
    ///
    /// The row that triggered the notice is already stored.
    #[error("Output sink error: {0}")]
    Sink(#[from] SinkError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sink_closed_error() {
        let err = RegistryError::from(SinkError::Closed);
        assert!(err.to_string().contains("Sink closed"));
    }

    #[test]
    fn test_sink_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe gone");
        let err = RegistryError::from(SinkError::from(io));
        assert!(err.to_string().contains("pipe gone"));
    }
}
