use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::warn;

use crate::dto::HealthResponse;
use crate::state::AppState;

pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let storage = state.storage.kind().as_str();

    match state.storage.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok",
                storage,
                detail: None,
            }),
        ),
        Err(error) => {
            warn!(storage, error = %error, "storage health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "degraded",
                    storage,
                    detail: Some("storage backend is unreachable".to_owned()),
                }),
            )
        }
    }
}
