//! Campus entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A university campus.
///
/// The short code doubles as the spot-number prefix and as the leading
/// token of legacy wall-code strings. Campuses are created and edited by
/// the admin front-end; the admission core only ever reads them.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Campus {
    /// Unique campus identifier.
    pub id: i64,
    /// Display name, e.g. "Beirut".
    pub name: String,
    /// Short code, e.g. "BEI".
    pub short_code: String,
    /// When the campus was created.
    pub created_at: DateTime<Utc>,
}
