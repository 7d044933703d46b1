//! Block entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A block: an optional subdivision of a campus used for spot numbering
/// and wall-code scoping. Read-only to the admission core.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Block {
    /// Unique block identifier.
    pub id: i64,
    /// The campus this block belongs to.
    pub campus_id: i64,
    /// Display name, e.g. "Block B".
    pub name: String,
    /// When the block was created.
    pub created_at: DateTime<Utc>,
}
