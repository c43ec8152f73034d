//! # Domain Module
//!
//! Record types, errors and configuration for the registry.

pub mod config;
pub mod entities;
pub mod errors;

pub use config::*;
pub use entities::*;
pub use errors::*;
