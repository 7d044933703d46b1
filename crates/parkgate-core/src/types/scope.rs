//! Resolved scan scope.

use serde::{Deserialize, Serialize};

/// The campus/block scope a scanned wall code resolves to.
///
/// `block_id = None` means the code covers the whole campus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scope {
    /// The campus the code is bound to.
    pub campus_id: i64,
    /// Optional block subdivision within the campus.
    pub block_id: Option<i64>,
}

impl Scope {
    /// Create a campus-wide scope.
    pub fn campus(campus_id: i64) -> Self {
        Self {
            campus_id,
            block_id: None,
        }
    }

    /// Create a block-level scope.
    pub fn block(campus_id: i64, block_id: i64) -> Self {
        Self {
            campus_id,
            block_id: Some(block_id),
        }
    }
}
