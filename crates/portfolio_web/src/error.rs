use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::error;
use portfolio_core::{ProjectValidationError, RepoError};
use thiserror::Error;

const SERVER_ERROR_BODY: &str = "Internal Server Error";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(ProjectValidationError),

    #[error("Malformed form submission: {0}")]
    MalformedForm(String),

    #[error("Storage error: {0}")]
    Storage(RepoError),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] tokio::task::JoinError),
}

impl From<RepoError> for AppError {
    fn from(value: RepoError) -> Self {
        match value.as_validation() {
            Some(err) => Self::Validation(err),
            None => Self::Storage(value),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Validation(_) | AppError::MalformedForm(_) => StatusCode::BAD_REQUEST,
            AppError::Storage(_) | AppError::Template(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        if status.is_server_error() {
            // Details stay in the log; clients only see the status text.
            error!("event=request_failed module=web status=error error={self}");
            return (status, SERVER_ERROR_BODY).into_response();
        }

        (status, self.to_string()).into_response()
    }
}
