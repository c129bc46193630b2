use axum::Json;
use axum::extract::State;

use crate::dto::LoginStatsResponse;
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn login_stats_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<LoginStatsResponse>> {
    let stats = state.stats_service.compute_stats().await?;

    Ok(Json(LoginStatsResponse::from(stats)))
}
