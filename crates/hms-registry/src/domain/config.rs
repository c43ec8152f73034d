//! Registry configuration
//!
//! # Example
//!
//! ```ignore
//! use hms_registry::RegistryConfig;
//!
//! let config = RegistryConfig::default()
//!     .with_announce_mutations(false)
//!     .with_list_headers(true);
//! ```

use serde::{Deserialize, Serialize};
use std::env;

/// Controls what the registry writes to its output sink.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Emit a confirmation notice after every add operation
    pub announce_mutations: bool,
    /// Emit a header line (e.g. `Patients:`) before each listing
    pub list_headers: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            announce_mutations: true,
            list_headers: true,
        }
    }
}

impl RegistryConfig {
    /// Create configuration from environment variables.
    ///
    /// - `HMS_ANNOUNCE_MUTATIONS`: emit add notices (default: true)
    /// - `HMS_LIST_HEADERS`: emit listing headers (default: true)
    pub fn from_env() -> Self {
        Self {
            announce_mutations: parse_flag(env::var("HMS_ANNOUNCE_MUTATIONS").ok(), true),
            list_headers: parse_flag(env::var("HMS_LIST_HEADERS").ok(), true),
        }
    }

    /// Builder-style method to toggle add notices
    pub fn with_announce_mutations(mut self, enabled: bool) -> Self {
        self.announce_mutations = enabled;
        self
    }

    /// Builder-style method to toggle listing headers
    pub fn with_list_headers(mut self, enabled: bool) -> Self {
        self.list_headers = enabled;
        self
    }

    /// Silent configuration: no notices, no headers.
    pub fn quiet() -> Self {
        Self {
            announce_mutations: false,
            list_headers: false,
        }
    }
}

/// `false` and `0` disable, anything else enables, unset keeps the default.
fn parse_flag(value: Option<String>, default: bool) -> bool {
    value
        .map(|v| v.to_lowercase() != "false" && v != "0")
        .unwrap_or(default)
}
