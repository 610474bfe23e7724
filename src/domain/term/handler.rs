use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use super::{
    dto::{TermRequest, TermResponse},
    service::TermService,
};
use crate::state::AppState;
use crate::utils::error::AppError;

/// Term of the day
///
/// Generates a new term for the category, avoiding terms used there in the last 30 days,
/// and records it.
#[utoipa::path(
    post,
    path = "/v1/generate-term",
    tag = "Term",
    request_body = TermRequest,
    responses(
        (status = 200, description = "Term generated", body = TermResponse),
        (status = 400, description = "Malformed request", body = crate::utils::response::ErrorResponse),
        (status = 500, description = "Generation failed", body = crate::utils::response::ErrorResponse),
        (status = 503, description = "AI or database unavailable", body = crate::utils::response::ErrorResponse)
    )
)]
pub async fn generate_term(
    State(state): State<AppState>,
    request: Result<Json<TermRequest>, JsonRejection>,
) -> Result<Json<TermResponse>, AppError> {
    let Json(request) = request.map_err(AppError::from)?;

    tracing::info!(
        category = %request.category,
        user_id = %request.user_id,
        "Term request received"
    );

    let ai = state
        .ai
        .as_ref()
        .map_err(|e| AppError::AiUnavailable(e.to_string()))?;

    // held for this request only; released when it goes out of scope
    let store = state.store.acquire().await.inspect_err(|e| {
        tracing::error!(category = %request.category, error = %e, "Store connection failed")
    })?;

    let response = TermService::generate_term(ai.as_ref(), store.as_ref(), &request).await?;

    Ok(Json(response))
}
