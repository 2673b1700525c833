use crate::models::health_dto::Health;
use crate::routes::router::AppState;
use crate::services;
use axum::extract::State;
use axum::Json;
use utoipa;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service status: healthy, warning (database disconnected) or error", body = Health)
    ),
    tag = "health"
)]
pub async fn health(State(state): State<AppState>) -> Json<Health> {
    Json(services::health::check(&state.pool, &state.status, &state.config).await)
}
