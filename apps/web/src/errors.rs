use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::contact::ValidationError;
use crate::demos::iris::InvalidFilter;
use crate::navigation::InvalidPage;

/// Application-level error type for the JSON API.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// HTML routes recover from these locally and always render a page.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    InvalidPage(#[from] InvalidPage),

    #[error(transparent)]
    InvalidFilter(#[from] InvalidFilter),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

// Extractor failures on the JSON API use the same envelope as handler errors.
impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match &self {
            AppError::InvalidPage(e) => (StatusCode::NOT_FOUND, "INVALID_PAGE", e.to_string(), None),
            AppError::InvalidFilter(e) => {
                (StatusCode::BAD_REQUEST, "INVALID_FILTER", e.to_string(), None)
            }
            AppError::Validation(e) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                e.to_string(),
                Some(json!(e.errors)),
            ),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone(), None),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone(), None),
        };

        tracing::warn!("API request rejected ({code}): {}", self);

        let mut error = json!({
            "code": code,
            "message": message
        });
        if let Some(fields) = details {
            error["fields"] = fields;
        }

        (status, Json(json!({ "error": error }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::{submit_contact, ContactSubmission};

    async fn body_json(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_invalid_page_is_404() {
        let (status, body) = body_json(InvalidPage("blog".to_string()).into()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "INVALID_PAGE");
    }

    #[tokio::test]
    async fn test_validation_error_lists_fields() {
        let err = submit_contact(&ContactSubmission::default()).unwrap_err();
        let (status, body) = body_json(err.into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["fields"][0]["field"], "name");
        assert_eq!(body["error"]["fields"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_invalid_filter_is_400() {
        let (status, body) = body_json(InvalidFilter("rose".to_string()).into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"]["message"],
            "'rose' is not one of setosa, versicolor, virginica"
        );
    }
}
