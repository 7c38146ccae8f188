use crate::utils::error::{CatalogError, ErrorCategory};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Fallback for paths no route matches, including `/api/...` paths.
pub async fn not_found() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            detail: "Not Found".to_string(),
        }),
    )
}

/// Boundary wrapper: logs the full error and answers with a sanitized body.
#[derive(Debug)]
pub struct ApiError(pub CatalogError);

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        ApiError(err)
    }
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self.0.category() {
            ErrorCategory::NotFound => StatusCode::NOT_FOUND,
            ErrorCategory::Store => StatusCode::SERVICE_UNAVAILABLE,
            ErrorCategory::Validation | ErrorCategory::Configuration => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        if status_code.is_server_error() {
            tracing::error!(
                category = ?self.0.category(),
                "request failed: {}",
                self.0
            );
        } else {
            tracing::debug!("request rejected: {}", self.0);
        }

        (
            status_code,
            Json(ErrorResponse {
                detail: self.0.user_friendly_message().to_string(),
            }),
        )
            .into_response()
    }
}
