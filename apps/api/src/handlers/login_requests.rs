use axum::Json;
use axum::extract::{Path, Query, State};
use tollgate_application::SubmitLoginRequestInput;
use tollgate_domain::{LoginRequestId, LoginRequestStatus};

use crate::dto::{
    LoginRequestListQuery, LoginRequestResponse, LoginRequestStatusResponse, SubmitLoginRequest,
};
use crate::error::ApiResult;
use crate::state::AppState;


pub async fn submit_login_request_handler(
    State(state): State<AppState>,
    Json(payload): Json<SubmitLoginRequest>,
) -> ApiResult<Json<LoginRequestResponse>> {
    let request = state
        .login_request_service
        .submit(SubmitLoginRequestInput {
            username: payload.username,
            password: payload.password,
            ip_address: payload.ip_address,
        })
        .await?;

    Ok(Json(LoginRequestResponse::from(request)))
}

pub async fn list_login_requests_handler(
    State(state): State<AppState>,
    Query(query): Query<LoginRequestListQuery>,
) -> ApiResult<Json<Vec<LoginRequestResponse>>> {
    let status = query
        .status
        .as_deref()
        .map(str::parse::<LoginRequestStatus>)
        .transpose()?;

    let requests = state
        .login_request_service
        .list_by_status(status)
        .await?
        .into_iter()
        .map(LoginRequestResponse::from)
        .collect();

    Ok(Json(requests))
}

pub async fn list_pending_login_requests_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<LoginRequestResponse>>> {
    let requests = state
        .login_request_service
        .list_pending()
        .await?
        .into_iter()
        .map(LoginRequestResponse::from)
        .collect();

    Ok(Json(requests))
}

pub async fn get_login_request_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<LoginRequestResponse>> {
    let request = state
        .login_request_service
        .get_by_id(LoginRequestId::new(id))
        .await?;

    Ok(Json(LoginRequestResponse::from(request)))
}

pub async fn login_request_status_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<LoginRequestStatusResponse>> {
    let request = state
        .login_request_service
        .get_by_id(LoginRequestId::new(id))
        .await?;

    Ok(Json(LoginRequestStatusResponse::from(request)))
}

pub async fn approve_login_request_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<LoginRequestResponse>> {
    let request = state
        .lifecycle_service
        .approve(LoginRequestId::new(id))
        .await?;

    Ok(Json(LoginRequestResponse::from(request)))
}

pub async fn reject_login_request_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<LoginRequestResponse>> {
    let request = state
        .lifecycle_service
        .reject(LoginRequestId::new(id))
        .await?;

    Ok(Json(LoginRequestResponse::from(request)))
}
