//! Service Layer
//!
//! - `RegistryService`: single-owner registry implementing `RegistryApi`
//! - `SharedRegistry`: lock-guarded handle for multi-threaded callers

mod registry_service;
mod shared;

pub use registry_service::RegistryService;
pub use shared::SharedRegistry;
