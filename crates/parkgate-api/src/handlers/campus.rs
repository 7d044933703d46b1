//! Campus availability handlers.

use axum::Json;
use axum::extract::{Path, State};

use parkgate_core::error::AppError;

use crate::dto::response::{ApiResponse, AvailabilityResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/campuses/{id}/availability
pub async fn availability(
    State(state): State<AppState>,
    Path(campus_id): Path<i64>,
) -> Result<Json<ApiResponse<AvailabilityResponse>>, ApiError> {
    let campus = state
        .campuses
        .find_by_id(campus_id)
        .await?
        .ok_or_else(|| AppError::not_found("Campus not found"))?;

    let counts = state.spots.availability(campus_id).await?;

    Ok(Json(ApiResponse::ok(AvailabilityResponse {
        campus_id: campus.id,
        campus: campus.name,
        total: counts.total,
        free: counts.free,
        occupied: counts.total - counts.free,
    })))
}
