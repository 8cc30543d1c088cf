use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::config::DEFAULT_APP_NAME;
use crate::models::RenderError;
use crate::render::render_error_page;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Every variant is shown to the visitor as the HTML error page.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    /// A failed profile lookup, already shaped for display.
    #[error("{}: {}", .0.status_code, .0.title)]
    Render(RenderError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    fn parts(&self) -> (StatusCode, String) {
        match self {
            AppError::NotFound(title) => (StatusCode::NOT_FOUND, title.clone()),
            AppError::Render(e) => (
                StatusCode::from_u16(e.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                e.title.clone(),
            ),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred".to_string(),
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, title) = self.parts();
        let view = RenderError {
            status_code: status.as_u16(),
            title,
        };

        (status, render_error_page(DEFAULT_APP_NAME, &view)).into_response()
    }
}
