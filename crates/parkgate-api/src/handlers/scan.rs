//! The QR scan endpoint.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use parkgate_core::error::AppError;

use crate::dto::request::ScanRequest;
use crate::dto::response::ScanResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/scan
///
/// Decided outcomes (ENTRY, EXIT, every denial) are HTTP 200; only a
/// malformed request body is an HTTP error.
pub async fn scan(
    State(state): State<AppState>,
    Json(payload): Json<ScanRequest>,
) -> Result<Json<ScanResponse>, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let outcome = state
        .admission
        .admit(&payload.scanned_code, &payload.user_email)
        .await;

    Ok(Json(ScanResponse::from(outcome)))
}
