//! Ports Layer
//!
//! - Driving Port (inbound): `RegistryApi`
//! - Driven Port (outbound): `OutputSink`

pub mod inbound;
pub mod outbound;

pub use inbound::{RegistryApi, RegistrySnapshot, RegistrySummary};
pub use outbound::{NullSink, OutputSink};
