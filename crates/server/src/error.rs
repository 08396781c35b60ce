use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use matcher::ValidationError;
use serde::{Deserialize, Serialize};
use serde_json::json;
use store::StoreError;
use userdir::DirectoryError;

pub type ServerResult<T> = Result<T, ServerError>;

/// Server error types
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Invalid search criteria: {0}")]
    Validation(#[from] ValidationError),

    #[error("User {0} not found")]
    UserNotFound(i32),

    #[error("No users found")]
    NoMatch,

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found")]
    NotFound,
}

/// API error response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl ServerError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::BadRequest(_) | ServerError::Validation(_) => StatusCode::BAD_REQUEST,
            ServerError::UserNotFound(_) | ServerError::NoMatch | ServerError::NotFound => {
                StatusCode::NOT_FOUND
            }
            ServerError::Internal(_) | ServerError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error code string
    pub fn error_code(&self) -> &'static str {
        match self {
            ServerError::BadRequest(_) => "BAD_REQUEST",
            ServerError::Validation(_) => "INVALID_CRITERIA",
            ServerError::UserNotFound(_) | ServerError::NotFound => "NOT_FOUND",
            ServerError::NoMatch => "NO_MATCH",
            ServerError::Internal(_) => "INTERNAL_ERROR",
            ServerError::Config(_) => "CONFIG_ERROR",
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, code = self.error_code(), "request_failed");
        }

        let body = Json(json!({
            "error": {
                "code": self.error_code(),
                "message": self.to_string(),
            }
        }));

        (status, body).into_response()
    }
}

impl From<StoreError> for ServerError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { id } => ServerError::UserNotFound(id),
            StoreError::NoMatch => ServerError::NoMatch,
            StoreError::Validation(err) => ServerError::Validation(err),
        }
    }
}

impl From<DirectoryError> for ServerError {
    fn from(err: DirectoryError) -> Self {
        match err {
            DirectoryError::InvalidId(raw) => {
                ServerError::BadRequest(format!("Invalid user ID: {raw}"))
            }
            DirectoryError::Config(err) => ServerError::Config(err.to_string()),
            DirectoryError::Decode(err) => ServerError::Internal(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for ServerError {
    fn from(err: serde_json::Error) -> Self {
        ServerError::BadRequest(format!("JSON parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_errors_map_to_http_statuses() {
        let not_found = ServerError::from(StoreError::NotFound { id: 9 });
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(not_found.error_code(), "NOT_FOUND");
        assert_eq!(not_found.to_string(), "User 9 not found");

        let no_match = ServerError::from(StoreError::NoMatch);
        assert_eq!(no_match.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(no_match.error_code(), "NO_MATCH");

        let invalid =
            ServerError::from(StoreError::Validation(ValidationError::UnknownField("zip".into())));
        assert_eq!(invalid.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(invalid.error_code(), "INVALID_CRITERIA");
    }

    #[test]
    fn invalid_id_is_bad_request() {
        let err = ServerError::from(DirectoryError::InvalidId("abc".into()));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Bad request: Invalid user ID: abc");
    }
}
