//! # Inbound Ports
//!
//! API trait defining what the registry can do.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{
    Appointment, Billing, HealthRecord, InventoryItem, Patient, RegistryError, StaffMember,
};

/// Row counts per table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrySummary {
    /// Registered patients.
    pub patients: usize,
    /// Scheduled appointments.
    pub appointments: usize,
    /// EHR entries.
    pub ehr_records: usize,
    /// Billing entries.
    pub billings: usize,
    /// Inventory rows.
    pub inventory: usize,
    /// Staff members.
    pub staff: usize,
}

impl RegistrySummary {
    /// Total rows across every table.
    pub fn total(&self) -> usize {
        self.patients
            + self.appointments
            + self.ehr_records
            + self.billings
            + self.inventory
            + self.staff
    }
}

/// Owned copy of every table, in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    /// Patient table.
    pub patients: Vec<Patient>,
    /// Appointment table.
    pub appointments: Vec<Appointment>,
    /// EHR table.
    pub ehr_records: Vec<HealthRecord>,
    /// Billing table.
    pub billings: Vec<Billing>,
    /// Inventory table.
    pub inventory: Vec<InventoryItem>,
    /// Staff table.
    pub staff: Vec<StaffMember>,
}

/// Registry API - inbound port.
///
/// Add operations accept any input and append exactly one row. The returned
/// error only reports that the confirmation notice could not be written.
/// Display operations write the listing to the sink and return the
/// formatted rows, header excluded.
pub trait RegistryApi {
    /// Register a patient.
    fn register_patient(
        &mut self,
        id: &str,
        name: &str,
        contact: &str,
    ) -> Result<(), RegistryError>;

    /// Schedule an appointment. `patient_id` is not checked.
    fn schedule_appointment(
        &mut self,
        patient_id: &str,
        date: DateTime<Utc>,
        doctor: &str,
    ) -> Result<(), RegistryError>;

    /// Add an EHR entry.
    fn add_ehr(&mut self, patient_id: &str, record: &str) -> Result<(), RegistryError>;

    /// Add a billing entry.
    fn add_billing(&mut self, patient_id: &str, amount: f64) -> Result<(), RegistryError>;

    /// Add an inventory row.
    fn add_inventory_item(&mut self, item_name: &str, quantity: i32) -> Result<(), RegistryError>;

    /// Add a staff member.
    fn add_staff(&mut self, id: &str, name: &str, role: &str) -> Result<(), RegistryError>;

    /// List patients.
    fn display_patients(&self) -> Result<Vec<String>, RegistryError>;

    /// List appointments.
    fn display_appointments(&self) -> Result<Vec<String>, RegistryError>;

    /// List EHR entries.
    fn display_ehr_records(&self) -> Result<Vec<String>, RegistryError>;

    /// List billing entries.
    fn display_billings(&self) -> Result<Vec<String>, RegistryError>;

    /// List inventory rows.
    fn display_inventory(&self) -> Result<Vec<String>, RegistryError>;

    /// List staff members.
    fn display_staff(&self) -> Result<Vec<String>, RegistryError>;

    /// Row counts per table.
    fn summary(&self) -> RegistrySummary;

    /// Owned copy of every table.
    fn snapshot(&self) -> RegistrySnapshot;
}
