use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method};
use tollgate_core::AppError;
use tower_http::cors::{Any, CorsLayer};

/// Restricts CORS to `frontend_url` when configured; any origin otherwise.
pub(super) fn build_cors_layer(frontend_url: Option<&str>) -> Result<CorsLayer, AppError> {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    let Some(frontend_url) = frontend_url else {
        return Ok(layer.allow_origin(Any));
    };

    Ok(layer.allow_origin(
        HeaderValue::from_str(frontend_url)
            .map_err(|error| AppError::Validation(format!("invalid FRONTEND_URL: {error}")))?,
    ))
}
