//! Parking session repository implementation.
//!
//! This repository exclusively owns session create/close; no other
//! component writes to the session table.

use sqlx::PgPool;

use parkgate_core::error::{AppError, ErrorKind};
use parkgate_core::result::AppResult;
use parkgate_core::types::pagination::{PageRequest, PageResponse};
use parkgate_core::types::scope::Scope;
use parkgate_entity::session::{OpenSessionView, ParkingSession};

const OPEN_VIEW_SELECT: &str = "SELECT ps.id, ps.user_id, u.full_name AS user_name, \
     ps.spot_id, sp.spot_number, c.name AS campus_name, b.name AS block_name, ps.entered_at \
     FROM parking_sessions ps \
     JOIN users u ON u.id = ps.user_id \
     JOIN parking_spots sp ON sp.id = ps.spot_id \
     JOIN campuses c ON c.id = sp.campus_id \
     LEFT JOIN blocks b ON b.id = sp.block_id \
     WHERE ps.exited_at IS NULL";

/// Repository for session ledger operations.
#[derive(Debug, Clone)]
pub struct SessionRepository {
    pool: PgPool,
}

impl SessionRepository {
    /// Create a new session repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find the open session for a user, joined to spot/campus/block for
    /// reporting. At most one row can exist per user.
    pub async fn find_open_by_user(&self, user_id: i64) -> AppResult<Option<OpenSessionView>> {
        sqlx::query_as::<_, OpenSessionView>(&format!("{OPEN_VIEW_SELECT} AND ps.user_id = $1"))
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find open session", e)
            })
    }

    /// Find an open session by its id, joined for reporting.
    pub async fn find_open_by_id(&self, session_id: i64) -> AppResult<Option<OpenSessionView>> {
        sqlx::query_as::<_, OpenSessionView>(&format!("{OPEN_VIEW_SELECT} AND ps.id = $1"))
            .bind(session_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find session by id", e)
            })
    }

    /// Open a session on the lowest-numbered free spot in the given scope.
    ///
    /// Candidate selection and the session insert execute as one statement,
    /// with `FOR UPDATE SKIP LOCKED` on the spot row so two concurrent
    /// scans can never be assigned the same spot. Returns `None` when the
    /// scope has no assignable spot left.
    pub async fn open_at_free_spot(
        &self,
        user_id: i64,
        scope: Scope,
    ) -> AppResult<Option<ParkingSession>> {
        sqlx::query_as::<_, ParkingSession>(
            "WITH candidate AS ( \
                SELECT id FROM parking_spots \
                WHERE campus_id = $2 \
                AND ($3::BIGINT IS NULL OR block_id = $3) \
                AND is_reserved = FALSE \
                AND NOT EXISTS ( \
                    SELECT 1 FROM parking_sessions s \
                    WHERE s.spot_id = parking_spots.id AND s.exited_at IS NULL) \
                ORDER BY spot_number ASC \
                LIMIT 1 \
                FOR UPDATE SKIP LOCKED \
             ) \
             INSERT INTO parking_sessions (user_id, spot_id) \
             SELECT $1, id FROM candidate \
             RETURNING *",
        )
        .bind(user_id)
        .bind(scope.campus_id)
        .bind(scope.block_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            if e.as_database_error()
                .is_some_and(|db| db.is_unique_violation())
            {
                AppError::with_source(ErrorKind::Conflict, "Session already open", e)
            } else {
                AppError::with_source(ErrorKind::Database, "Failed to open session", e)
            }
        })
    }

    /// Close the caller's open session, if any. The `WHERE` clause is keyed
    /// on the user, never on a session id supplied by the caller, so a scan
    /// can only ever close its own session.
    pub async fn close_open_for_user(&self, user_id: i64) -> AppResult<Option<ParkingSession>> {
        sqlx::query_as::<_, ParkingSession>(
            "UPDATE parking_sessions SET exited_at = NOW() \
             WHERE user_id = $1 AND exited_at IS NULL \
             RETURNING *",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to close session", e))
    }

    /// List all open sessions with pagination (dashboard view).
    pub async fn list_open(&self, page: &PageRequest) -> AppResult<PageResponse<OpenSessionView>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM parking_sessions WHERE exited_at IS NULL",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count open sessions", e))?;

        let sessions = sqlx::query_as::<_, OpenSessionView>(&format!(
            "{OPEN_VIEW_SELECT} ORDER BY ps.entered_at DESC LIMIT $1 OFFSET $2"
        ))
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list open sessions", e))?;

        Ok(PageResponse::new(
            sessions,
            page.page,
            page.page_size,
            total as u64,
        ))
    }
}
