use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use wishlist_core::storage::{repository_error_to_status_code, RepositoryError};

/// Errors surfaced to API clients.
///
/// Repository errors are mapped through the taxonomy's status-code
/// mapping; 5xx detail stays server-side and the client receives an
/// opaque message.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("validation failed")]
    Validation(Vec<String>),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(messages) => (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": messages })),
            )
                .into_response(),
            ApiError::Repository(err) => {
                let status = StatusCode::from_u16(repository_error_to_status_code(&err))
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

                let message = if status.is_server_error() {
                    tracing::error!(error = %err, "Repository operation failed");
                    "internal server error".to_string()
                } else {
                    err.to_string()
                };

                (status, Json(serde_json::json!({ "error": message }))).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_is_400() {
        let response =
            ApiError::Validation(vec!["\"name\" is not allowed to be empty".to_string()])
                .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_is_404() {
        let response = ApiError::Repository(RepositoryError::NotFound {
            entity_type: "Wishlist",
            id: "abc".to_string(),
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_access_denied_is_403() {
        let response = ApiError::Repository(RepositoryError::AccessDenied {
            entity_type: "Wishlist",
            id: "abc".to_string(),
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_store_failure_is_500() {
        let response =
            ApiError::Repository(RepositoryError::QueryFailed("boom".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_timeout_is_504() {
        let response =
            ApiError::Repository(RepositoryError::Timeout("deadline".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
    }
}
