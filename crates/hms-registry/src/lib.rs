//! # HMS Registry
//!
//! In-memory hospital record registry.
//!
//! **Architecture:** Hexagonal (Ports/Adapters)
//!
//! ## Purpose
//!
//! Holds six append-only, insertion-ordered tables (patients, appointments,
//! EHR entries, billings, inventory, staff) and exposes add and display
//! operations for each:
//! - Every input is accepted as-is: duplicate ids, unknown patient ids,
//!   negative amounts and quantities are all stored
//! - Add operations write a confirmation notice to the output sink
//! - Display operations write a header plus one line per row and return
//!   the formatted rows
//!
//! ## Module Structure
//!
//! ```text
//! hms-registry/
//! ├── domain/          # Entities, errors, RegistryConfig
//! ├── ports/           # RegistryApi (inbound), OutputSink (outbound)
//! ├── adapters/        # WriterSink, MemorySink, TracingSink
//! └── service/         # RegistryService, SharedRegistry
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use hms_registry::{RegistryApi, RegistryService, WriterSink};
//!
//! let mut registry = RegistryService::new(WriterSink::stdout());
//! registry.register_patient("P1", "Alice", "555-0100")?;
//! registry.display_patients()?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use adapters::{MemorySink, TracingSink, WriterSink};
pub use domain::{
    Appointment, Billing, HealthRecord, InventoryItem, Patient, RegistryConfig, RegistryError,
    SinkError, StaffMember,
};
pub use ports::{NullSink, OutputSink, RegistryApi, RegistrySnapshot, RegistrySummary};
pub use service::{RegistryService, SharedRegistry};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    #[test]
    fn test_version() {
        assert!(!super::VERSION.is_empty());
    }
}
