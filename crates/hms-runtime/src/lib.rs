//! # HMS Runtime
//!
//! Wires a registry to its sink and drives the demonstration session run by
//! the `hms-runtime` binary.
//!
//! ## Startup Sequence
//!
//! 1. Load configuration (from env)
//! 2. Initialize telemetry
//! 3. Build the registry over stdout
//! 4. Run the session and log the resulting row counts

use chrono::{DateTime, Duration, Utc};
use tracing::info;

use hms_registry::{OutputSink, RegistryApi, RegistryError, RegistryService, RegistrySummary};

/// Populate every table, then list every table.
///
/// `now` anchors the appointment dates so callers control the clock.
pub fn run_demo_session<S: OutputSink>(
    registry: &mut RegistryService<S>,
    now: DateTime<Utc>,
) -> Result<RegistrySummary, RegistryError> {
    registry.register_patient("P001", "John Doe", "555-1234")?;
    registry.register_patient("P002", "Jane Smith", "555-5678")?;

    registry.schedule_appointment("P001", now, "Dr. Adams")?;
    registry.schedule_appointment("P002", now + Duration::days(1), "Dr. Baker")?;

    registry.add_ehr("P001", "Diagnosed with hypertension")?;
    registry.add_ehr("P002", "Annual checkup, no issues")?;

    registry.add_billing("P001", 250.0)?;
    registry.add_billing("P002", 120.5)?;

    registry.add_inventory_item("Bandages", 100)?;
    registry.add_inventory_item("Syringes", 500)?;

    registry.add_staff("S001", "Alice Johnson", "Nurse")?;
    registry.add_staff("S002", "Bob Brown", "Surgeon")?;

    registry.display_patients()?;
    registry.display_appointments()?;
    registry.display_ehr_records()?;
    registry.display_billings()?;
    registry.display_inventory()?;
    registry.display_staff()?;

    let summary = registry.summary();
    info!(
        patients = summary.patients,
        appointments = summary.appointments,
        ehr_records = summary.ehr_records,
        billings = summary.billings,
        inventory = summary.inventory,
        staff = summary.staff,
        "Session complete"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hms_registry::{MemorySink, RegistryConfig};
    use std::sync::Arc;

    #[test]
    fn test_demo_session_fills_every_table() {
        let mut registry = RegistryService::new(hms_registry::NullSink);
        let summary = run_demo_session(&mut registry, Utc::now()).unwrap();

        assert_eq!(summary.patients, 2);
        assert_eq!(summary.appointments, 2);
        assert_eq!(summary.ehr_records, 2);
        assert_eq!(summary.billings, 2);
        assert_eq!(summary.inventory, 2);
        assert_eq!(summary.staff, 2);
    }

    #[test]
    fn test_demo_session_output() {
        let sink = Arc::new(MemorySink::new());
        let mut registry = RegistryService::new(sink.clone());
        let now = Utc::now();
        run_demo_session(&mut registry, now).unwrap();

        let lines = sink.lines();
        // 12 notices, 6 headers, 12 rows
        assert_eq!(lines.len(), 30);
        assert_eq!(lines[0], "Patient registered: John Doe");
        assert!(lines.contains(&"Staff Members:".to_string()));
        assert!(lines.contains(&format!(
            "Appointment for Patient ID: P002, Date: {}, Doctor: Dr. Baker",
            now + Duration::days(1)
        )));
    }

    #[test]
    fn test_demo_session_quiet() {
        let sink = Arc::new(MemorySink::new());
        let mut registry = RegistryService::with_config(sink.clone(), RegistryConfig::quiet());
        run_demo_session(&mut registry, Utc::now()).unwrap();

        assert_eq!(sink.lines().len(), 12);
    }

    #[test]
    fn test_demo_session_stops_on_closed_sink() {
        let sink = Arc::new(MemorySink::new());
        sink.close();
        let mut registry = RegistryService::new(sink);

        let result = run_demo_session(&mut registry, Utc::now());
        assert!(result.is_err());
        assert_eq!(registry.summary().patients, 1);
    }
}
