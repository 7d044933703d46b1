//! Wall code registry repository implementation.

use sqlx::PgPool;

use parkgate_core::error::{AppError, ErrorKind};
use parkgate_core::result::AppResult;
use parkgate_entity::wall_code::WallCode;

/// Repository for registered wall/box codes.
#[derive(Debug, Clone)]
pub struct WallCodeRepository {
    pool: PgPool,
}

impl WallCodeRepository {
    /// Create a new wall code repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a registry entry by its exact code string.
    pub async fn find_by_code(&self, code: &str) -> AppResult<Option<WallCode>> {
        sqlx::query_as::<_, WallCode>("SELECT * FROM wall_codes WHERE code = $1")
            .bind(code)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find wall code", e)
            })
    }
}
