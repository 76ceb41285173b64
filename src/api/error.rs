use crate::application::ApplicationError;
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::types::ErrorResponse;

/// API layer error
///
/// Wraps application errors and extractor rejections and maps them to HTTP
/// responses.
#[derive(Debug)]
pub enum ApiError {
    Application(ApplicationError),
    /// Malformed body, path, or query string
    BadRequest(String),
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        ApiError::Application(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let text = rejection.body_text();
        // serde reports an empty body as EOF before the first value
        if text.contains("EOF while parsing a value at line 1 column 0") {
            return ApiError::BadRequest("missing body".to_string());
        }
        ApiError::BadRequest(text)
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(format!("query params are invalid: {}", rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            ApiError::BadRequest(msg) => {
                tracing::debug!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg)
            }

            // 404 Not Found
            ApiError::Application(ApplicationError::NotFound) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                "Resource not found".to_string(),
            ),

            // 422 Unprocessable Entity - business rule violations
            ApiError::Application(ApplicationError::InvalidData(msg)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "INVALID_DATA", msg)
            }
            ApiError::Application(ApplicationError::MemberNotFound) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "MEMBER_NOT_FOUND",
                "Member not found".to_string(),
            ),
            ApiError::Application(ApplicationError::ClassNotFound) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "CLASS_NOT_FOUND",
                "Class not found".to_string(),
            ),
            ApiError::Application(ApplicationError::InvalidClassDate) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "INVALID_CLASS_DATE",
                "Class date is outside the class date range".to_string(),
            ),

            // 500 Internal Server Error
            // details go to the log; the client only gets a generic message
            ApiError::Application(ApplicationError::Store { context, source }) => {
                tracing::error!(error = ?source, "{}", context);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An unexpected error occurred".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse::new(error_type, message));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::StoreError;

    fn status_of(err: ApplicationError) -> StatusCode {
        ApiError::from(err).into_response().status()
    }

    #[test]
    fn test_domain_errors_are_unprocessable() {
        assert_eq!(
            status_of(ApplicationError::InvalidData("x".into())),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status_of(ApplicationError::MemberNotFound),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status_of(ApplicationError::ClassNotFound),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status_of(ApplicationError::InvalidClassDate),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_not_found_is_404() {
        assert_eq!(status_of(ApplicationError::NotFound), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_store_errors_are_500() {
        let err = ApplicationError::Store {
            context: "failed to list members",
            source: StoreError::backend(std::io::Error::other("connection refused")),
        };
        assert_eq!(status_of(err), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_bad_request_is_400() {
        let response = ApiError::BadRequest("missing body".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
