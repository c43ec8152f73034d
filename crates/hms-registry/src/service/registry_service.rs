//! Registry Service
//!
//! Owns the six append-only tables and implements `RegistryApi` on top of an
//! injected output sink.

use chrono::{DateTime, Utc};
use std::fmt::Display;
use tracing::{debug, warn};

use crate::domain::{
    Appointment, Billing, HealthRecord, InventoryItem, Patient, RegistryConfig, RegistryError,
    StaffMember,
};
use crate::ports::{OutputSink, RegistryApi, RegistrySnapshot, RegistrySummary};

/// Header lines written before each listing.
const PATIENTS_HEADER: &str = "Patients:";
const APPOINTMENTS_HEADER: &str = "Appointments:";
const EHR_HEADER: &str = "EHR Records:";
const BILLINGS_HEADER: &str = "Billings:";
const INVENTORY_HEADER: &str = "Inventory:";
const STAFF_HEADER: &str = "Staff Members:";

/// In-memory registry.
///
/// Rows are only ever appended; insertion order is listing order.
pub struct RegistryService<S: OutputSink> {
    /// Output sink (driven port)
    sink: S,
    config: RegistryConfig,
    patients: Vec<Patient>,
    appointments: Vec<Appointment>,
    ehr_records: Vec<HealthRecord>,
    billings: Vec<Billing>,
    inventory: Vec<InventoryItem>,
    staff: Vec<StaffMember>,
}

impl<S: OutputSink> RegistryService<S> {
    /// Create an empty registry writing to `sink`.
    pub fn new(sink: S) -> Self {
        Self::with_config(sink, RegistryConfig::default())
    }

    /// Create with custom configuration
    pub fn with_config(sink: S, config: RegistryConfig) -> Self {
        Self {
            sink,
            config,
            patients: Vec::new(),
            appointments: Vec::new(),
            ehr_records: Vec::new(),
            billings: Vec::new(),
            inventory: Vec::new(),
            staff: Vec::new(),
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// The injected sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consume the registry, returning its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Patients in registration order.
    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    /// Appointments in scheduling order.
    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    /// EHR entries in insertion order.
    pub fn ehr_records(&self) -> &[HealthRecord] {
        &self.ehr_records
    }

    /// Billing entries in insertion order.
    pub fn billings(&self) -> &[Billing] {
        &self.billings
    }

    /// Inventory rows in insertion order.
    pub fn inventory(&self) -> &[InventoryItem] {
        &self.inventory
    }

    /// Staff members in insertion order.
    pub fn staff(&self) -> &[StaffMember] {
        &self.staff
    }

    fn announce(&self, notice: String) -> Result<(), RegistryError> {
        if !self.config.announce_mutations {
            return Ok(());
        }
        self.sink.emit(&notice).map_err(|e| {
            warn!(error = %e, "[hms] Failed to write notice");
            RegistryError::from(e)
        })
    }

    fn list<T: Display>(&self, header: &str, rows: &[T]) -> Result<Vec<String>, RegistryError> {
        let lines: Vec<String> = rows.iter().map(ToString::to_string).collect();

        if self.config.list_headers {
            self.sink.emit(header).map_err(|e| {
                warn!(error = %e, header, "[hms] Failed to write listing header");
                RegistryError::from(e)
            })?;
        }
        for line in &lines {
            self.sink.emit(line).map_err(|e| {
                warn!(error = %e, header, "[hms] Failed to write listing");
                RegistryError::from(e)
            })?;
        }

        Ok(lines)
    }
}

impl<S: OutputSink> RegistryApi for RegistryService<S> {
    fn register_patient(
        &mut self,
        id: &str,
        name: &str,
        contact: &str,
    ) -> Result<(), RegistryError> {
        self.patients.push(Patient::new(id, name, contact));
        debug!(id, rows = self.patients.len(), "[hms] Patient appended");
        self.announce(format!("Patient registered: {}", name))
    }

    fn schedule_appointment(
        &mut self,
        patient_id: &str,
        date: DateTime<Utc>,
        doctor: &str,
    ) -> Result<(), RegistryError> {
        self.appointments.push(Appointment::new(patient_id, date, doctor));
        debug!(patient_id, rows = self.appointments.len(), "[hms] Appointment appended");
        self.announce(format!("Appointment scheduled for Patient ID: {}", patient_id))
    }

    fn add_ehr(&mut self, patient_id: &str, record: &str) -> Result<(), RegistryError> {
        self.ehr_records.push(HealthRecord::new(patient_id, record));
        debug!(patient_id, rows = self.ehr_records.len(), "[hms] EHR appended");
        self.announce(format!("EHR added for Patient ID: {}", patient_id))
    }

    fn add_billing(&mut self, patient_id: &str, amount: f64) -> Result<(), RegistryError> {
        self.billings.push(Billing::new(patient_id, amount));
        debug!(patient_id, amount, rows = self.billings.len(), "[hms] Billing appended");
        self.announce(format!("Billing added for Patient ID: {}", patient_id))
    }

    fn add_inventory_item(&mut self, item_name: &str, quantity: i32) -> Result<(), RegistryError> {
        self.inventory.push(InventoryItem::new(item_name, quantity));
        debug!(item_name, quantity, rows = self.inventory.len(), "[hms] Inventory appended");
        self.announce(format!("Inventory item added: {}", item_name))
    }

    fn add_staff(&mut self, id: &str, name: &str, role: &str) -> Result<(), RegistryError> {
        self.staff.push(StaffMember::new(id, name, role));
        debug!(id, rows = self.staff.len(), "[hms] Staff appended");
        self.announce(format!("Staff member added: {}", name))
    }

    fn display_patients(&self) -> Result<Vec<String>, RegistryError> {
        self.list(PATIENTS_HEADER, &self.patients)
    }

    fn display_appointments(&self) -> Result<Vec<String>, RegistryError> {
        self.list(APPOINTMENTS_HEADER, &self.appointments)
    }

    fn display_ehr_records(&self) -> Result<Vec<String>, RegistryError> {
        self.list(EHR_HEADER, &self.ehr_records)
    }

    fn display_billings(&self) -> Result<Vec<String>, RegistryError> {
        self.list(BILLINGS_HEADER, &self.billings)
    }

    fn display_inventory(&self) -> Result<Vec<String>, RegistryError> {
        self.list(INVENTORY_HEADER, &self.inventory)
    }

    fn display_staff(&self) -> Result<Vec<String>, RegistryError> {
        self.list(STAFF_HEADER, &self.staff)
    }

    fn summary(&self) -> RegistrySummary {
        RegistrySummary {
            patients: self.patients.len(),
            appointments: self.appointments.len(),
            ehr_records: self.ehr_records.len(),
            billings: self.billings.len(),
            inventory: self.inventory.len(),
            staff: self.staff.len(),
        }
    }

    fn snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot {
            patients: self.patients.clone(),
            appointments: self.appointments.clone(),
            ehr_records: self.ehr_records.clone(),
            billings: self.billings.clone(),
            inventory: self.inventory.clone(),
            staff: self.staff.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemorySink;
    use crate::domain::SinkError;
    use crate::ports::NullSink;
    use chrono::TimeZone;
    use std::sync::Arc;

    fn create_test_registry() -> (RegistryService<Arc<MemorySink>>, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        (RegistryService::new(sink.clone()), sink)
    }

    fn test_date() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 20, 14, 0, 0).unwrap()
    }

    #[test]
    fn test_register_patient_emits_notice() {
        let (mut registry, sink) = create_test_registry();
        registry.register_patient("P1", "Alice", "555-0100").unwrap();

        assert_eq!(registry.patients().len(), 1);
        assert_eq!(sink.lines(), vec!["Patient registered: Alice"]);
    }

    #[test]
    fn test_every_add_notice() {
        let (mut registry, sink) = create_test_registry();
        registry.schedule_appointment("P1", test_date(), "Dr. Smith").unwrap();
        registry.add_ehr("P1", "Flu shot").unwrap();
        registry.add_billing("P1", 80.0).unwrap();
        registry.add_inventory_item("Gauze", 12).unwrap();
        registry.add_staff("S1", "Bob", "Nurse").unwrap();

        assert_eq!(
            sink.lines(),
            vec![
                "Appointment scheduled for Patient ID: P1",
                "EHR added for Patient ID: P1",
                "Billing added for Patient ID: P1",
                "Inventory item added: Gauze",
                "Staff member added: Bob",
            ]
        );
    }

    #[test]
    fn test_display_patients_in_order() {
        let (mut registry, sink) = create_test_registry();
        registry.register_patient("P1", "Alice", "555-0100").unwrap();
        registry.register_patient("P2", "Carol", "555-0101").unwrap();
        sink.drain();

        let lines = registry.display_patients().unwrap();
        assert_eq!(
            lines,
            vec![
                "Patient ID: P1, Name: Alice, Contact: 555-0100",
                "Patient ID: P2, Name: Carol, Contact: 555-0101",
            ]
        );
        assert_eq!(sink.lines()[0], "Patients:");
        assert_eq!(sink.lines()[1..], lines[..]);
    }

    #[test]
    fn test_duplicate_ids_are_kept() {
        let (mut registry, _sink) = create_test_registry();
        registry.register_patient("P1", "Alice", "555-0100").unwrap();
        registry.register_patient("P1", "Alice", "555-0100").unwrap();

        assert_eq!(registry.display_patients().unwrap().len(), 2);
    }

    #[test]
    fn test_unknown_patient_appointment_is_listed() {
        let (mut registry, _sink) = create_test_registry();
        registry.schedule_appointment("GHOST", test_date(), "Dr. Who").unwrap();

        let lines = registry.display_appointments().unwrap();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("GHOST"));
    }

    #[test]
    fn test_empty_listing_writes_only_header() {
        let (registry, sink) = create_test_registry();
        assert!(registry.display_staff().unwrap().is_empty());
        assert_eq!(sink.lines(), vec!["Staff Members:"]);
    }

    #[test]
    fn test_listing_headers() {
        let (registry, sink) = create_test_registry();
        registry.display_patients().unwrap();
        registry.display_appointments().unwrap();
        registry.display_ehr_records().unwrap();
        registry.display_billings().unwrap();
        registry.display_inventory().unwrap();
        registry.display_staff().unwrap();

        assert_eq!(
            sink.lines(),
            vec![
                "Patients:",
                "Appointments:",
                "EHR Records:",
                "Billings:",
                "Inventory:",
                "Staff Members:",
            ]
        );
    }

    #[test]
    fn test_quiet_config_suppresses_output() {
        let sink = Arc::new(MemorySink::new());
        let mut registry = RegistryService::with_config(sink.clone(), RegistryConfig::quiet());
        registry.add_inventory_item("Gauze", 1).unwrap();

        let lines = registry.display_inventory().unwrap();
        assert_eq!(lines, vec!["Item: Gauze, Quantity: 1"]);
        assert_eq!(sink.lines(), vec!["Item: Gauze, Quantity: 1"]);
    }

    #[test]
    fn test_closed_sink_keeps_row() {
        let (mut registry, sink) = create_test_registry();
        sink.close();

        let result = registry.add_billing("P1", -10.0);
        assert!(matches!(result, Err(RegistryError::Sink(SinkError::Closed))));
        assert_eq!(registry.billings().len(), 1);
        assert_eq!(registry.billings()[0].amount(), -10.0);
    }

    #[test]
    fn test_closed_sink_fails_listing_at_header() {
        let (mut registry, sink) = create_test_registry();
        registry.add_staff("S1", "Bob", "Nurse").unwrap();
        sink.close();

        let result = registry.display_staff();
        assert!(matches!(result, Err(RegistryError::Sink(SinkError::Closed))));
        assert_eq!(sink.lines(), vec!["Staff member added: Bob"]);
    }

    #[test]
    fn test_summary_and_snapshot() {
        let mut registry = RegistryService::new(NullSink);
        registry.register_patient("P1", "Alice", "555-0100").unwrap();
        registry.add_ehr("P1", "a").unwrap();
        registry.add_ehr("P1", "b").unwrap();
        registry.add_staff("S1", "Bob", "Nurse").unwrap();

        let summary = registry.summary();
        assert_eq!(summary.patients, 1);
        assert_eq!(summary.ehr_records, 2);
        assert_eq!(summary.staff, 1);
        assert_eq!(summary.total(), 4);

        let snapshot = registry.snapshot();
        assert_eq!(snapshot.ehr_records[1].record(), "b");
        assert_eq!(snapshot.patients, registry.patients());
    }
}
