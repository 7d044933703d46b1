//! Application state shared across all handlers.

use std::sync::Arc;

use parkgate_core::config::AppConfig;
use parkgate_database::DatabasePool;
use parkgate_database::repositories::{CampusRepository, SessionRepository, SpotRepository};
use parkgate_service::AdmissionService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool wrapper.
    pub db: DatabasePool,
    /// The admission controller behind the scan endpoint.
    pub admission: Arc<AdmissionService>,
    /// Session ledger queries (dashboard view).
    pub sessions: Arc<SessionRepository>,
    /// Spot inventory queries.
    pub spots: Arc<SpotRepository>,
    /// Campus lookups.
    pub campuses: Arc<CampusRepository>,
}

impl AppState {
    /// Assemble the state from a configuration and a connected pool.
    pub fn new(config: AppConfig, db: DatabasePool) -> Self {
        use parkgate_service::PgAdmissionStore;

        let pool = db.pool().clone();
        let store = Arc::new(PgAdmissionStore::new(pool.clone()));
        let admission = Arc::new(AdmissionService::new(store, config.parking.clone()));

        Self {
            config: Arc::new(config),
            db,
            admission,
            sessions: Arc::new(SessionRepository::new(pool.clone())),
            spots: Arc::new(SpotRepository::new(pool.clone())),
            campuses: Arc::new(CampusRepository::new(pool)),
        }
    }
}
