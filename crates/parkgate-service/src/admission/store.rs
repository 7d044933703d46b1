//! Storage seam for the admission controller.

use async_trait::async_trait;
use sqlx::PgPool;

use parkgate_core::result::AppResult;
use parkgate_core::types::scope::Scope;
use parkgate_database::repositories::{
    CampusRepository, SessionRepository, UserRepository, WallCodeRepository,
};
use parkgate_entity::block::Block;
use parkgate_entity::campus::Campus;
use parkgate_entity::session::{OpenSessionView, ParkingSession};
use parkgate_entity::user::User;
use parkgate_entity::wall_code::WallCode;

use parkgate_core::error::AppError;

/// Everything the admission controller needs from storage.
///
/// The trait exists so the decision procedure can be exercised against an
/// in-memory double; production uses [`PgAdmissionStore`]. Implementations
/// must make [`open_session_at_free_spot`](AdmissionStore::open_session_at_free_spot)
/// atomic: candidate-spot selection and the session insert either both
/// happen or neither does, and two concurrent calls never pick the same
/// spot.
#[async_trait]
pub trait AdmissionStore: Send + Sync + 'static {
    /// Look up a campus by id.
    async fn find_campus(&self, id: i64) -> AppResult<Option<Campus>>;

    /// Look up a campus by short code (case-insensitive).
    async fn find_campus_by_short_code(&self, short_code: &str) -> AppResult<Option<Campus>>;

    /// Look up a block by id.
    async fn find_block(&self, id: i64) -> AppResult<Option<Block>>;

    /// Look up a registered wall code by its exact string.
    async fn find_wall_code(&self, code: &str) -> AppResult<Option<WallCode>>;

    /// Look up a parking-permitted user by email (case-insensitive).
    async fn find_parker_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// The user's open session, joined for reporting, if one exists.
    async fn find_open_session(&self, user_id: i64) -> AppResult<Option<OpenSessionView>>;

    /// Close the user's open session; `None` if there was none.
    async fn close_open_session(&self, user_id: i64) -> AppResult<Option<ParkingSession>>;

    /// Atomically assign the lowest-numbered free spot in the scope and
    /// open a session on it; `None` if the scope has no free spot.
    async fn open_session_at_free_spot(
        &self,
        user_id: i64,
        scope: Scope,
    ) -> AppResult<Option<OpenSessionView>>;
}

/// PostgreSQL-backed [`AdmissionStore`] composed from the repositories.
#[derive(Debug, Clone)]
pub struct PgAdmissionStore {
    campuses: CampusRepository,
    users: UserRepository,
    wall_codes: WallCodeRepository,
    sessions: SessionRepository,
}

impl PgAdmissionStore {
    /// Create a new store over the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self {
            campuses: CampusRepository::new(pool.clone()),
            users: UserRepository::new(pool.clone()),
            wall_codes: WallCodeRepository::new(pool.clone()),
            sessions: SessionRepository::new(pool),
        }
    }
}

#[async_trait]
impl AdmissionStore for PgAdmissionStore {
    async fn find_campus(&self, id: i64) -> AppResult<Option<Campus>> {
        self.campuses.find_by_id(id).await
    }

    async fn find_campus_by_short_code(&self, short_code: &str) -> AppResult<Option<Campus>> {
        self.campuses.find_by_short_code(short_code).await
    }

    async fn find_block(&self, id: i64) -> AppResult<Option<Block>> {
        self.campuses.find_block(id).await
    }

    async fn find_wall_code(&self, code: &str) -> AppResult<Option<WallCode>> {
        self.wall_codes.find_by_code(code).await
    }

    async fn find_parker_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.users.find_parker_by_email(email).await
    }

    async fn find_open_session(&self, user_id: i64) -> AppResult<Option<OpenSessionView>> {
        self.sessions.find_open_by_user(user_id).await
    }

    async fn close_open_session(&self, user_id: i64) -> AppResult<Option<ParkingSession>> {
        self.sessions.close_open_for_user(user_id).await
    }

    async fn open_session_at_free_spot(
        &self,
        user_id: i64,
        scope: Scope,
    ) -> AppResult<Option<OpenSessionView>> {
        let Some(session) = self.sessions.open_at_free_spot(user_id, scope).await? else {
            return Ok(None);
        };

        // Reporting read only; the state change above already committed.
        self.sessions
            .find_open_by_id(session.id)
            .await?
            .map(Some)
            .ok_or_else(|| AppError::internal("Freshly opened session disappeared"))
    }
}
