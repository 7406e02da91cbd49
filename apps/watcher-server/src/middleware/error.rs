//! Error handling middleware - RFC 7807 compliant responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use std::fmt;
use watcher_core::ApiError;
use watcher_shared::ErrorResponse;

use crate::observability::RequestId;

/// Application-level error type that converts to RFC 7807 responses.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    /// A primary Tautulli call failed. `context` names the call.
    Upstream {
        context: &'static str,
        source: ApiError,
        request_id: Option<String>,
    },
}

impl AppError {
    pub fn upstream(context: &'static str, source: ApiError, request_id: &RequestId) -> Self {
        AppError::Upstream {
            context,
            source,
            request_id: Some(request_id.as_str().to_string()),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Upstream {
                context, source, ..
            } => write!(f, "{}: {}", context, source),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound(detail) => ErrorResponse::not_found(detail),
            AppError::BadRequest(detail) => ErrorResponse::bad_request(detail),
            AppError::Upstream { request_id, .. } => {
                let detail = self.to_string();
                tracing::error!(request_id = ?request_id, "{}", detail);
                let error = ErrorResponse::internal_error(detail);
                match request_id {
                    Some(id) => error.with_request_id(id),
                    None => error,
                }
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn test_upstream_error_embeds_underlying_failure() {
        let err = AppError::upstream(
            "Tautulli get_users failed",
            ApiError::upstream("get_users", "bad key"),
            &RequestId("req-42".to_string()),
        );
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(err.error_response().into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(
            json["detail"],
            "Tautulli get_users failed: Tautulli API error for cmd=get_users: bad key"
        );
        assert_eq!(json["status"], 500);
        assert_eq!(json["request_id"], "req-42");
    }

    #[test]
    fn test_client_errors_map_to_4xx() {
        assert_eq!(
            AppError::BadRequest("limit".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::NotFound("user".into()).status_code(),
            StatusCode::NOT_FOUND
        );
    }
}
