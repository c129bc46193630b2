use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tollgate_core::AppError;
use tracing::error;

mod types;

pub use types::ErrorResponse;

/// HTTP API error wrapper around core application errors.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(value: AppError) -> Self {
        Self(value)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self.0 {
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            AppError::Validation(message) => (StatusCode::BAD_REQUEST, message),
            AppError::Internal(detail) => {
                error!(error = %detail, "request failed with internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_owned(),
                )
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

/// Standard API result type.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use tollgate_core::AppError;

    use super::ApiError;

    async fn body_message(error: AppError) -> (StatusCode, String) {
        let response = ApiError(error).into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .unwrap_or_default();
        let payload: serde_json::Value = serde_json::from_slice(&bytes).unwrap_or_default();
        let message = payload
            .get("message")
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default()
            .to_owned();
        (status, message)
    }

    #[tokio::test]
    async fn not_found_maps_to_404_with_message() {
        let (status, message) =
            body_message(AppError::NotFound("login request '7' does not exist".to_owned())).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(message, "login request '7' does not exist");
    }

    #[tokio::test]
    async fn internal_errors_do_not_leak_detail() {
        let (status, message) = body_message(AppError::Internal(
            "failed to list login requests: password authentication failed".to_owned(),
        ))
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(message, "internal server error");
    }

    #[tokio::test]
    async fn validation_maps_to_400() {
        let (status, _) =
            body_message(AppError::Validation("unknown login request status 'x'".to_owned()))
                .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
