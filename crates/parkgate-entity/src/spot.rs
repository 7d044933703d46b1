//! Parking spot entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A single parking spot.
///
/// There is deliberately no stored occupancy flag: a spot is occupied
/// exactly when an open session references it, so occupancy is always
/// computed from the session table in the same query that needs it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ParkingSpot {
    /// Unique spot identifier.
    pub id: i64,
    /// The campus this spot belongs to.
    pub campus_id: i64,
    /// Optional block within the campus.
    pub block_id: Option<i64>,
    /// Spot number, unique within its (campus, block) scope, e.g. "BEI-001".
    pub spot_number: String,
    /// Reserved spots are excluded from automatic assignment.
    pub is_reserved: bool,
    /// When the spot was created.
    pub created_at: DateTime<Utc>,
}

/// Free/total spot counts for one campus, used by the availability view.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SpotAvailability {
    /// Total non-reserved spots in the campus.
    pub total: i64,
    /// Spots with no open session.
    pub free: i64,
}
