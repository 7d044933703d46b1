//! Campus repository implementation.

use sqlx::PgPool;

use parkgate_core::error::{AppError, ErrorKind};
use parkgate_core::result::AppResult;
use parkgate_entity::block::Block;
use parkgate_entity::campus::Campus;

/// Repository for campus and block lookups. Read-only: campuses and blocks
/// are maintained by the admin front-end, never by this service.
#[derive(Debug, Clone)]
pub struct CampusRepository {
    pool: PgPool,
}

impl CampusRepository {
    /// Create a new campus repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a campus by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Campus>> {
        sqlx::query_as::<_, Campus>("SELECT * FROM campuses WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find campus by id", e)
            })
    }

    /// Find a campus by short code (case-insensitive).
    pub async fn find_by_short_code(&self, short_code: &str) -> AppResult<Option<Campus>> {
        sqlx::query_as::<_, Campus>("SELECT * FROM campuses WHERE UPPER(short_code) = UPPER($1)")
            .bind(short_code)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find campus by short code", e)
            })
    }

    /// Find a block by primary key.
    pub async fn find_block(&self, id: i64) -> AppResult<Option<Block>> {
        sqlx::query_as::<_, Block>("SELECT * FROM blocks WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find block by id", e)
            })
    }
}
