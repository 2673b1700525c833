use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!("{}", self);
        let message = match self {
            AppError::Template(_) => "The page could not be rendered.",
            AppError::Database(_) => "An internal server error occurred.",
        };

        (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
    }
}
