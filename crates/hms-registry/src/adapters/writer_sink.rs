//! Writer Sink Adapter
//!
//! Implements `OutputSink` over any `io::Write`. The runtime wires it to
//! stdout.

use crate::domain::SinkError;
use crate::ports::outbound::OutputSink;
use parking_lot::Mutex;
use std::io::{self, Write};

/// Line-oriented sink over a writer.
pub struct WriterSink<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    /// Wrap a writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Recover the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl WriterSink<io::Stdout> {
    /// Sink over process stdout.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> OutputSink for WriterSink<W> {
    fn emit(&self, line: &str) -> Result<(), SinkError> {
        let mut writer = self.writer.lock();
        writeln!(writer, "{}", line)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenWriter;

    impl Write for BrokenWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed pipe"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_lines_are_newline_terminated() {
        let sink = WriterSink::new(Vec::new());
        sink.emit("Patients:").unwrap();
        sink.emit("Patient ID: P1, Name: Alice, Contact: 555-0100").unwrap();

        let out = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(
            out,
            "Patients:\nPatient ID: P1, Name: Alice, Contact: 555-0100\n"
        );
    }

    #[test]
    fn test_write_failure_is_reported() {
        let sink = WriterSink::new(BrokenWriter);
        let result = sink.emit("lost");
        assert!(matches!(result, Err(SinkError::Io(_))));
    }
}
