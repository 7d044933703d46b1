//! User repository implementation.

use sqlx::PgPool;

use parkgate_core::error::{AppError, ErrorKind};
use parkgate_core::result::AppResult;
use parkgate_entity::user::User;

/// Repository for user lookups. The admission core only ever reads users;
/// account management lives in the admin front-end.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a parking-permitted user by email (case-insensitive).
    ///
    /// Only staff and instructor accounts may open parking sessions, so
    /// the role filter lives in the query rather than in the caller.
    pub async fn find_parker_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>(
            "SELECT * FROM users WHERE LOWER(email) = LOWER($1) AND role IN ('staff', 'instructor')",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by email", e))
    }
}
