use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{error, warn};

use super::response::ErrorResponse;

/// Generic detail returned for every 500; internal text stays in the logs.
pub const GENERIC_FAILURE_DETAIL: &str = "Failed to generate term.";

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// AI client failed to initialize at startup
    #[error("AI service is not available: {0}")]
    AiUnavailable(String),

    /// Per-request store connection could not be acquired
    #[error("Database service is not available: {0}")]
    StoreUnavailable(String),

    /// The AI call itself failed
    #[error("AI provider error: {0}")]
    Provider(String),

    /// AI output lacks the `Term: Definition` delimiter
    #[error("AI response format error: {0}")]
    ResponseFormat(String),

    /// Reading recent terms failed
    #[error("Failed to query recent terms: {0}")]
    StoreQuery(String),

    /// Insert or commit of the new term failed
    #[error("Failed to persist term: {0}")]
    Persistence(String),

    #[error("Invalid request body: {0}")]
    JsonParseFailed(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Error code returned to the caller
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::AiUnavailable(_) => "AI_001",
            AppError::Provider(_) => "AI_002",
            AppError::ResponseFormat(_) => "AI_003",
            AppError::StoreUnavailable(_) => "DB_001",
            AppError::StoreQuery(_) => "DB_002",
            AppError::Persistence(_) => "DB_003",
            AppError::JsonParseFailed(_) => "COMMON400",
            AppError::Internal(_) => "COMMON500",
        }
    }

    /// HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::AiUnavailable(_) | AppError::StoreUnavailable(_) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            AppError::JsonParseFailed(_) => StatusCode::BAD_REQUEST,
            AppError::Provider(_)
            | AppError::ResponseFormat(_)
            | AppError::StoreQuery(_)
            | AppError::Persistence(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Detail message safe to expose to the caller
    pub fn public_detail(&self) -> String {
        match self {
            AppError::AiUnavailable(_) => "AI service is not available.".to_string(),
            AppError::StoreUnavailable(_) => "Database service is not available.".to_string(),
            AppError::JsonParseFailed(msg) => format!("Invalid request body: {}", msg),
            _ => GENERIC_FAILURE_DETAIL.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.error_code();

        if status.is_server_error() {
            error!(code = code, status = status.as_u16(), error = %self, "Request failed");
        } else {
            warn!(code = code, status = status.as_u16(), error = %self, "Request rejected");
        }

        let body = ErrorResponse::new(code, self.public_detail());
        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::JsonParseFailed(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[test]
    fn unavailable_errors_should_map_to_503() {
        assert_eq!(
            AppError::AiUnavailable("no key".into()).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            AppError::StoreUnavailable("refused".into()).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn generation_failures_should_map_to_500() {
        let errors = [
            AppError::Provider("quota".into()),
            AppError::ResponseFormat("no colon".into()),
            AppError::StoreQuery("timeout".into()),
            AppError::Persistence("deadlock".into()),
        ];

        for err in errors {
            assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(err.public_detail(), GENERIC_FAILURE_DETAIL);
        }
    }

    #[test]
    fn body_errors_should_map_to_400() {
        let err = AppError::JsonParseFailed("missing field `userId`".into());

        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code(), "COMMON400");
    }

    #[tokio::test]
    async fn internal_text_should_not_leak_into_response_body() {
        // Arrange
        let err = AppError::Persistence("Duplicate entry 'secret-row' for key".into());

        // Act
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        // Assert
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["code"], "DB_003");
        assert_eq!(body["detail"], GENERIC_FAILURE_DETAIL);
        assert!(!String::from_utf8_lossy(&bytes).contains("secret-row"));
    }
}
