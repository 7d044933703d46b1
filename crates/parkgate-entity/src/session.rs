//! Parking session entity model.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One entry/exit cycle of a vehicle on a spot.
///
/// A session is created only by a successful ENTRY decision and closed
/// only by a successful EXIT decision for the same user. At most one
/// session per user (and per spot) may have `exited_at = NULL` at any
/// time; partial unique indexes enforce this at the storage level.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ParkingSession {
    /// Unique session identifier.
    pub id: i64,
    /// The user who parked.
    pub user_id: i64,
    /// The spot the vehicle occupies.
    pub spot_id: i64,
    /// When the session was opened (gate entry).
    pub entered_at: DateTime<Utc>,
    /// When the session was closed (gate exit), if it has been.
    pub exited_at: Option<DateTime<Utc>>,
}

impl ParkingSession {
    /// Check whether the vehicle is still parked.
    pub fn is_open(&self) -> bool {
        self.exited_at.is_none()
    }

    /// Elapsed time between entry and exit (or now, for open sessions).
    pub fn elapsed(&self) -> Duration {
        self.exited_at.unwrap_or_else(Utc::now) - self.entered_at
    }
}

/// An open session joined to its user, spot, campus, and block, as needed
/// for scan receipts and the open-sessions dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OpenSessionView {
    /// Session identifier.
    pub id: i64,
    /// Owning user.
    pub user_id: i64,
    /// The user's display name.
    pub user_name: String,
    /// Occupied spot.
    pub spot_id: i64,
    /// The occupied spot's number.
    pub spot_number: String,
    /// Campus display name.
    pub campus_name: String,
    /// Block display name, if the spot sits in a block.
    pub block_name: Option<String>,
    /// When the session was opened.
    pub entered_at: DateTime<Utc>,
}
