//! Crate-wide error type and its HTTP mapping.

use crate::models::Subject;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error as ThisError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("student {id} not found")]
    StudentNotFound { id: i32 },

    #[error("{subject} grade {id} not found")]
    GradeNotFound { subject: Subject, id: i32 },

    #[error("unknown subject '{0}'")]
    UnknownSubject(String),

    #[error("invalid request: {0}")]
    Validation(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::StudentNotFound { .. } | Error::GradeNotFound { .. } => StatusCode::NOT_FOUND,
            Error::UnknownSubject(_) | Error::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::Database(_) | Error::Migration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
