//! Request-scoped error type and its HTTP mapping.
//!
//! Every handler returns `Result<_, AppError>` and the conversion to an HTTP
//! response happens in exactly one place, the [`IntoResponse`] impl. Error
//! bodies follow the wire contract of the service: a flat JSON object
//! `{"error": "<message>"}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// JSON body shared by all error responses.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// Errors that can occur while serving a request.
///
/// The variants mirror the service's error taxonomy: client-caused
/// validation failures, unknown short codes, and persistence failures.
/// Startup failures are not represented here; they abort the process via
/// `anyhow` before any request is served.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The client sent an unusable request (missing field, wrong content
    /// type, unparseable body).
    #[error("{0}")]
    Validation(String),

    /// The requested short code has no stored mapping.
    #[error("{0}")]
    NotFound(String),

    /// The database rejected or failed the operation. The message is the
    /// driver's error text, passed through to the client verbatim.
    #[error("{0}")]
    Database(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// The canonical unknown-short-code error. The body text is part of the
    /// API contract, so there is exactly one way to spell it.
    pub fn not_found() -> Self {
        Self::NotFound("Not found".to_string())
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database(message.into())
    }

    /// HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::Database(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Not-found outcomes are logged at the lookup site where the code
        // is in scope; the boundary only logs what would otherwise be lost.
        match &self {
            AppError::Validation(message) => {
                tracing::warn!(error = %message, "Rejected request");
            }
            AppError::Database(message) => {
                tracing::error!(error = %message, "Database operation failed");
            }
            AppError::NotFound(_) => {}
        }

        let status = self.status();
        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::{Value, json};

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::validation("Missing URL").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::not_found().status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::database("boom").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_sqlx_errors_become_database_errors() {
        let err: AppError = sqlx::Error::PoolClosed.into();
        assert!(matches!(err, AppError::Database(_)));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_validation_response_body() {
        let response = AppError::validation("Missing URL").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({ "error": "Missing URL" }));
    }

    #[tokio::test]
    async fn test_not_found_response_body() {
        let response = AppError::not_found().into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({ "error": "Not found" }));
    }

    #[tokio::test]
    async fn test_database_error_message_is_passed_through() {
        let response = AppError::database("connection refused").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({ "error": "connection refused" }));
    }
}
