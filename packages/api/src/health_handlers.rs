// ABOUTME: Liveness endpoint handler
// ABOUTME: Reports the health service status as plain text

use axum::extract::State;
use tracing::debug;

use crate::state::AppState;

/// Liveness probe
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service is up", body = String))
)]
pub async fn health_check(State(state): State<AppState>) -> String {
    debug!("Health check");
    format!("Health: {}", state.health.check_health())
}
