use axum::Router;
use axum::routing::{get, post};
use tollgate_core::AppError;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

mod cors;

use cors::build_cors_layer;

pub fn build_router(app_state: AppState, frontend_url: Option<&str>) -> Result<Router, AppError> {
    let api_routes = Router::new()
        .route(
            "/api/login",
            post(handlers::login_requests::submit_login_request_handler),
        )
        .route(
            "/api/login-requests",
            get(handlers::login_requests::list_login_requests_handler),
        )
        .route(
            "/api/login-requests/pending",
            get(handlers::login_requests::list_pending_login_requests_handler),
        )
        .route(
            "/api/login-requests/{id}",
            get(handlers::login_requests::get_login_request_handler),
        )
        .route(
            "/api/login-requests/{id}/status",
            get(handlers::login_requests::login_request_status_handler),
        )
        .route(
            "/api/login-requests/{id}/approve",
            post(handlers::login_requests::approve_login_request_handler),
        )
        .route(
            "/api/login-requests/{id}/reject",
            post(handlers::login_requests::reject_login_request_handler),
        )
        .route(
            "/api/login-attempts",
            get(handlers::attempts::list_login_attempts_handler),
        )
        .route("/api/stats", get(handlers::stats::login_stats_handler));

    Ok(Router::new()
        .route("/health", get(handlers::health::health_handler))
        .merge(api_routes)
        .layer(build_cors_layer(frontend_url)?)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state))
}
