//! Parking spot repository implementation.

use sqlx::PgPool;

use parkgate_core::error::{AppError, ErrorKind};
use parkgate_core::result::AppResult;
use parkgate_entity::spot::SpotAvailability;

/// Repository for spot inventory queries.
///
/// Occupancy is never stored on the spot row; every query that needs it
/// derives it from the existence of an open session referencing the spot.
/// Spot allocation itself lives in [`super::SessionRepository`] because it
/// must share a statement with the session insert.
#[derive(Debug, Clone)]
pub struct SpotRepository {
    pool: PgPool,
}

impl SpotRepository {
    /// Create a new spot repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Free/total counts of assignable (non-reserved) spots for a campus.
    pub async fn availability(&self, campus_id: i64) -> AppResult<SpotAvailability> {
        sqlx::query_as::<_, SpotAvailability>(
            "SELECT COUNT(*) FILTER (WHERE NOT is_reserved) AS total, \
             COUNT(*) FILTER (WHERE NOT is_reserved AND NOT EXISTS ( \
                SELECT 1 FROM parking_sessions s \
                WHERE s.spot_id = parking_spots.id AND s.exited_at IS NULL)) AS free \
             FROM parking_spots WHERE campus_id = $1",
        )
        .bind(campus_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to compute availability", e)
        })
    }
}
