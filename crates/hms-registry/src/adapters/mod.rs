//! # Adapters Layer (Hexagonal Architecture)
//!
//! Implements the `OutputSink` port.

mod memory_sink;
mod tracing_sink;
mod writer_sink;

pub use memory_sink::MemorySink;
pub use tracing_sink::TracingSink;
pub use writer_sink::WriterSink;
