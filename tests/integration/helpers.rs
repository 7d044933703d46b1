//! Shared test helpers for integration tests.
//!
//! Requires a running PostgreSQL instance; configure it through
//! `config/test.toml` or `PARKGATE_DATABASE__URL`.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use parkgate_core::config::AppConfig;
use parkgate_database::DatabasePool;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries and seeding
    pub db_pool: PgPool,
    /// Application config
    pub config: AppConfig,
}

/// A captured HTTP response
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestApp {
    /// Create a new test application against a clean database
    pub async fn new() -> Self {
        let config = AppConfig::load("test").expect("Failed to load test config");

        let db = DatabasePool::connect(&config.database)
            .await
            .expect("Failed to connect to test database");

        parkgate_database::migration::run_migrations(db.pool())
            .await
            .expect("Failed to run migrations");

        Self::clean_database(db.pool()).await;

        let db_pool = db.pool().clone();
        let state = parkgate_api::AppState::new(config.clone(), db);
        let router = parkgate_api::build_router(state);

        Self {
            router,
            db_pool,
            config,
        }
    }

    async fn clean_database(pool: &PgPool) {
        let tables = [
            "parking_sessions",
            "wall_codes",
            "users",
            "parking_spots",
            "blocks",
            "campuses",
        ];
        for table in tables {
            sqlx::query(&format!("TRUNCATE TABLE {table} RESTART IDENTITY CASCADE"))
                .execute(pool)
                .await
                .unwrap_or_else(|_| panic!("Failed to truncate {table}"));
        }
    }

    /// Seed a campus and return its id
    pub async fn create_campus(&self, name: &str, short_code: &str) -> i64 {
        sqlx::query_scalar(
            "INSERT INTO campuses (name, short_code) VALUES ($1, $2) RETURNING id",
        )
        .bind(name)
        .bind(short_code)
        .fetch_one(&self.db_pool)
        .await
        .expect("Failed to seed campus")
    }

    /// Seed a spot and return its id
    pub async fn create_spot(
        &self,
        campus_id: i64,
        spot_number: &str,
        is_reserved: bool,
    ) -> i64 {
        sqlx::query_scalar(
            "INSERT INTO parking_spots (campus_id, spot_number, is_reserved) \
             VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(campus_id)
        .bind(spot_number)
        .bind(is_reserved)
        .fetch_one(&self.db_pool)
        .await
        .expect("Failed to seed spot")
    }

    /// Seed a user and return their id
    pub async fn create_user(
        &self,
        full_name: &str,
        email: &str,
        role: &str,
        home_campus_id: Option<i64>,
    ) -> i64 {
        sqlx::query_scalar(
            "INSERT INTO users (full_name, email, role, home_campus_id, parking_number) \
             VALUES ($1, $2, $3::user_role, $4, $5) RETURNING id",
        )
        .bind(full_name)
        .bind(email)
        .bind(role)
        .bind(home_campus_id)
        .bind(format!("P-{full_name}"))
        .fetch_one(&self.db_pool)
        .await
        .expect("Failed to seed user")
    }

    /// Send a request through the router
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }

    /// Convenience wrapper for the scan endpoint
    pub async fn scan(&self, scanned_code: &str, user_email: &str) -> TestResponse {
        self.request(
            "POST",
            "/api/scan",
            Some(serde_json::json!({
                "scanned_code": scanned_code,
                "user_email": user_email,
            })),
        )
        .await
    }
}
