//! Boundary error type and its HTTP rendering
//!
//! Every failure renders as `{"success": false, "error": <status>,
//! "message": <fixed text>}`. The fixed text depends on the status only;
//! details stay in the logs.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use trivia_core::errors::{ExError, ExErrorKind};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Failure reported by the engine or store; status follows the kind
    #[error(transparent)]
    Core(#[from] ExError),

    /// Body missing, not JSON, or of the wrong shape
    #[error("unprocessable request body: {0}")]
    InvalidBody(String),

    /// No route matches, or a path id is not an integer
    #[error("route not found")]
    RouteNotFound,

    #[error("method not allowed")]
    MethodNotAllowed,

    /// Blocking task died before producing a result
    #[error("internal failure: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Core(err) => status_for_kind(err.kind()),
            ApiError::InvalidBody(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

fn status_for_kind(kind: ExErrorKind) -> StatusCode {
    if kind.is_user_correctable() {
        StatusCode::UNPROCESSABLE_ENTITY
    } else if kind == ExErrorKind::NotFound {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

/// Caller-facing message for a status
pub fn public_message(status: StatusCode) -> &'static str {
    match status {
        StatusCode::UNPROCESSABLE_ENTITY => "Unprocessable entity",
        StatusCode::NOT_FOUND => "Not found",
        StatusCode::METHOD_NOT_ALLOWED => "Method not allowed",
        _ => "Please try again later",
    }
}

/// JSON error body for a status
pub fn error_response(status: StatusCode) -> Response {
    let body = json!({
        "success": false,
        "error": status.as_u16(),
        "message": public_message(status),
    });
    (status, Json(body)).into_response()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, status = status.as_u16(), "request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "request rejected");
        }
        error_response(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trivia_core::errors::TriviaError;

    #[test]
    fn test_validation_maps_to_422() {
        let err: ApiError = ExError::from(TriviaError::EmptyAnswer).into();
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let missing: ApiError = ExError::from(TriviaError::MissingField { field: "answer" }).into();
        assert_eq!(missing.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let err: ApiError = ExError::from(TriviaError::QuestionNotFound { question_id: 3 }).into();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_persistence_maps_to_500_with_generic_message() {
        let err: ApiError = ExError::new(ExErrorKind::Persistence)
            .with_message("database is locked")
            .into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(public_message(err.status()), "Please try again later");
    }

    #[test]
    fn test_status_follows_user_correctable_kinds() {
        for kind in [
            ExErrorKind::InvalidInput,
            ExErrorKind::MissingField,
            ExErrorKind::NotFound,
            ExErrorKind::Persistence,
            ExErrorKind::Io,
        ] {
            let status = status_for_kind(kind);
            assert_eq!(
                status == StatusCode::UNPROCESSABLE_ENTITY,
                kind.is_user_correctable(),
                "{:?} mapped to {}",
                kind,
                status
            );
        }
        assert_eq!(status_for_kind(ExErrorKind::Io), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_boundary_variants() {
        assert_eq!(ApiError::RouteNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::MethodNotAllowed.status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            ApiError::InvalidBody("eof".into()).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }
}
