//! Shared registry handle
//!
//! One `parking_lot::Mutex` guards the whole registry, so every operation
//! sees and produces a consistent set of tables and sink output is never
//! interleaved between two calls.

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use std::sync::Arc;

use crate::domain::{RegistryConfig, RegistryError};
use crate::ports::{OutputSink, RegistryApi, RegistrySnapshot, RegistrySummary};
use crate::service::RegistryService;

/// Cloneable, thread-safe handle to a single registry.
pub struct SharedRegistry<S: OutputSink> {
    inner: Arc<Mutex<RegistryService<S>>>,
}

impl<S: OutputSink> Clone for SharedRegistry<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: OutputSink> SharedRegistry<S> {
    /// Create an empty shared registry writing to `sink`.
    pub fn new(sink: S) -> Self {
        Self::from_service(RegistryService::new(sink))
    }

    /// Create with custom configuration.
    pub fn with_config(sink: S, config: RegistryConfig) -> Self {
        Self::from_service(RegistryService::with_config(sink, config))
    }

    /// Share an existing registry.
    pub fn from_service(service: RegistryService<S>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(service)),
        }
    }

    /// Run `f` with exclusive access to the registry.
    pub fn with_registry<R>(&self, f: impl FnOnce(&mut RegistryService<S>) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut guard)
    }

    /// See [`RegistryApi::register_patient`].
    pub fn register_patient(
        &self,
        id: &str,
        name: &str,
        contact: &str,
    ) -> Result<(), RegistryError> {
        self.inner.lock().register_patient(id, name, contact)
    }

    /// See [`RegistryApi::schedule_appointment`].
    pub fn schedule_appointment(
        &self,
        patient_id: &str,
        date: DateTime<Utc>,
        doctor: &str,
    ) -> Result<(), RegistryError> {
        self.inner.lock().schedule_appointment(patient_id, date, doctor)
    }

    /// See [`RegistryApi::add_ehr`].
    pub fn add_ehr(&self, patient_id: &str, record: &str) -> Result<(), RegistryError> {
        self.inner.lock().add_ehr(patient_id, record)
    }

    /// See [`RegistryApi::add_billing`].
    pub fn add_billing(&self, patient_id: &str, amount: f64) -> Result<(), RegistryError> {
        self.inner.lock().add_billing(patient_id, amount)
    }

    /// See [`RegistryApi::add_inventory_item`].
    pub fn add_inventory_item(&self, item_name: &str, quantity: i32) -> Result<(), RegistryError> {
        self.inner.lock().add_inventory_item(item_name, quantity)
    }

    /// See [`RegistryApi::add_staff`].
    pub fn add_staff(&self, id: &str, name: &str, role: &str) -> Result<(), RegistryError> {
        self.inner.lock().add_staff(id, name, role)
    }

    /// See [`RegistryApi::display_patients`].
    pub fn display_patients(&self) -> Result<Vec<String>, RegistryError> {
        self.inner.lock().display_patients()
    }

    /// See [`RegistryApi::display_appointments`].
    pub fn display_appointments(&self) -> Result<Vec<String>, RegistryError> {
        self.inner.lock().display_appointments()
    }

    /// See [`RegistryApi::display_ehr_records`].
    pub fn display_ehr_records(&self) -> Result<Vec<String>, RegistryError> {
        self.inner.lock().display_ehr_records()
    }

    /// See [`RegistryApi::display_billings`].
    pub fn display_billings(&self) -> Result<Vec<String>, RegistryError> {
        self.inner.lock().display_billings()
    }

    /// See [`RegistryApi::display_inventory`].
    pub fn display_inventory(&self) -> Result<Vec<String>, RegistryError> {
        self.inner.lock().display_inventory()
    }

    /// See [`RegistryApi::display_staff`].
    pub fn display_staff(&self) -> Result<Vec<String>, RegistryError> {
        self.inner.lock().display_staff()
    }

    /// Row counts per table.
    pub fn summary(&self) -> RegistrySummary {
        self.inner.lock().summary()
    }

    /// Owned copy of every table.
    pub fn snapshot(&self) -> RegistrySnapshot {
        self.inner.lock().snapshot()
    }
}
