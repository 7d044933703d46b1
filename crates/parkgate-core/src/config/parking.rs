//! Parking policy configuration.

use serde::{Deserialize, Serialize};

/// Parking admission policy settings.
///
/// These values are injected into the admission controller at construction
/// time; the controller never reads global state at decision time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParkingConfig {
    /// Whether users may park outside their home campus.
    #[serde(default)]
    pub allow_cross_campus: bool,
    /// Number of leading characters of a scanned code interpreted as a
    /// campus short code by the prefix fallback resolver.
    #[serde(default = "default_campus_code_length")]
    pub campus_code_length: usize,
}

impl Default for ParkingConfig {
    fn default() -> Self {
        Self {
            allow_cross_campus: false,
            campus_code_length: default_campus_code_length(),
        }
    }
}

fn default_campus_code_length() -> usize {
    3
}
