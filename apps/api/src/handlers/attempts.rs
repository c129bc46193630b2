use axum::Json;
use axum::extract::{Query, State};
use tollgate_application::{DEFAULT_ATTEMPT_LIMIT, LoginAttemptQuery};

use crate::dto::{LoginAttemptListQuery, LoginAttemptResponse};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn list_login_attempts_handler(
    State(state): State<AppState>,
    Query(query): Query<LoginAttemptListQuery>,
) -> ApiResult<Json<Vec<LoginAttemptResponse>>> {
    let attempts = state
        .attempt_log_service
        .list_attempts(LoginAttemptQuery {
            username: query.username,
            limit: query.limit.unwrap_or(DEFAULT_ATTEMPT_LIMIT),
        })
        .await?
        .into_iter()
        .map(LoginAttemptResponse::from)
        .collect();

    Ok(Json(attempts))
}
