use axum::{extract::State, Json};

use super::dto::HealthStatus;
use super::service::check_health;
use crate::state::AppState;

/// Health check API
///
/// Returns server state, version, uptime and dependency status.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Health report", body = HealthStatus)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(check_health(&state).await)
}
