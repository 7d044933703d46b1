//! Open-session dashboard handlers.

use axum::Json;
use axum::extract::{Query, State};

use parkgate_core::types::pagination::{PageRequest, PageResponse};
use parkgate_entity::session::OpenSessionView;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/sessions/open
pub async fn list_open(
    State(state): State<AppState>,
    Query(page): Query<PageRequest>,
) -> Result<Json<ApiResponse<PageResponse<OpenSessionView>>>, ApiError> {
    let page = PageRequest::new(page.page, page.page_size);
    let sessions = state.sessions.list_open(&page).await?;
    Ok(Json(ApiResponse::ok(sessions)))
}
