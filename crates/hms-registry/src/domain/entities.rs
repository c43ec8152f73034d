//! # Domain Entities
//!
//! The six record kinds held by the registry.
//!
//! Every entity is immutable once constructed: fields are private and only
//! exposed through accessors. Foreign references (`patient_id`) are plain
//! strings and are never checked against the patient table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A registered patient.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    id: String,
    name: String,
    contact: String,
}

impl Patient {
    /// Create a new patient record.
    pub fn new(id: impl Into<String>, name: impl Into<String>, contact: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            contact: contact.into(),
        }
    }

    /// Patient identifier (not guaranteed unique).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Patient name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Contact details, free form.
    pub fn contact(&self) -> &str {
        &self.contact
    }
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Patient ID: {}, Name: {}, Contact: {}",
            self.id, self.name, self.contact
        )
    }
}

/// A scheduled appointment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    patient_id: String,
    date: DateTime<Utc>,
    doctor: String,
}

impl Appointment {
    /// Create a new appointment.
    pub fn new(
        patient_id: impl Into<String>,
        date: DateTime<Utc>,
        doctor: impl Into<String>,
    ) -> Self {
        Self {
            patient_id: patient_id.into(),
            date,
            doctor: doctor.into(),
        }
    }

    /// Referenced patient id.
    pub fn patient_id(&self) -> &str {
        &self.patient_id
    }

    /// Appointment time.
    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    /// Attending doctor.
    pub fn doctor(&self) -> &str {
        &self.doctor
    }
}

impl fmt::Display for Appointment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Appointment for Patient ID: {}, Date: {}, Doctor: {}",
            self.patient_id, self.date, self.doctor
        )
    }
}

/// One electronic health record entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthRecord {
    patient_id: String,
    record: String,
}

impl HealthRecord {
    /// Create a new EHR entry.
    pub fn new(patient_id: impl Into<String>, record: impl Into<String>) -> Self {
        Self {
            patient_id: patient_id.into(),
            record: record.into(),
        }
    }

    /// Referenced patient id.
    pub fn patient_id(&self) -> &str {
        &self.patient_id
    }

    /// Free text body.
    pub fn record(&self) -> &str {
        &self.record
    }
}

impl fmt::Display for HealthRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EHR for Patient ID: {}, Record: {}", self.patient_id, self.record)
    }
}

/// A billing entry. The amount carries no currency and may be negative.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Billing {
    patient_id: String,
    amount: f64,
}

impl Billing {
    /// Create a new billing entry.
    pub fn new(patient_id: impl Into<String>, amount: f64) -> Self {
        Self {
            patient_id: patient_id.into(),
            amount,
        }
    }

    /// Referenced patient id.
    pub fn patient_id(&self) -> &str {
        &self.patient_id
    }

    /// Billed amount.
    pub fn amount(&self) -> f64 {
        self.amount
    }
}

impl fmt::Display for Billing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Debug keeps the fractional part of whole amounts: `150.0`, not `150`.
        write!(f, "Billing for Patient ID: {}, Amount: ${:?}", self.patient_id, self.amount)
    }
}

/// An inventory row. Re-adding the same item creates a second row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    item_name: String,
    quantity: i32,
}

impl InventoryItem {
    /// Create a new inventory row.
    pub fn new(item_name: impl Into<String>, quantity: i32) -> Self {
        Self {
            item_name: item_name.into(),
            quantity,
        }
    }

    /// Item name.
    pub fn item_name(&self) -> &str {
        &self.item_name
    }

    /// Quantity, may be negative.
    pub fn quantity(&self) -> i32 {
        self.quantity
    }
}

impl fmt::Display for InventoryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Item: {}, Quantity: {}", self.item_name, self.quantity)
    }
}

/// A staff member.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    id: String,
    name: String,
    role: String,
}

impl StaffMember {
    /// Create a new staff member.
    pub fn new(id: impl Into<String>, name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role: role.into(),
        }
    }

    /// Staff identifier (not guaranteed unique).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Staff name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Role, e.g. "Nurse".
    pub fn role(&self) -> &str {
        &self.role
    }
}

impl fmt::Display for StaffMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Staff ID: {}, Name: {}, Role: {}", self.id, self.name, self.role)
    }
}
