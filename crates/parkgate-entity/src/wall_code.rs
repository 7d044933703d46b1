//! Wall code registry entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A physical wall/box code registered for a gate or parking area.
///
/// Each entry binds an opaque code string to a campus and optionally a
/// block (`block_id = None` means whole-campus scope). The printed QR
/// payload uses the structured format rendered by [`WallCode::payload`];
/// older deployments printed raw short-code-prefixed strings instead,
/// which the resolver handles as a fallback.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WallCode {
    /// Unique registry identifier.
    pub id: i64,
    /// The scanned code string, unique across the registry.
    pub code: String,
    /// The campus the code is bound to.
    pub campus_id: i64,
    /// Optional block binding.
    pub block_id: Option<i64>,
    /// When the code was registered.
    pub created_at: DateTime<Utc>,
}

impl WallCode {
    /// Render the structured QR payload for this code's scope.
    pub fn payload(&self) -> String {
        match self.block_id {
            Some(block_id) => format!("CAMPUS:{}|BLOCK:{}", self.campus_id, block_id),
            None => format!("CAMPUS:{}", self.campus_id),
        }
    }
}
