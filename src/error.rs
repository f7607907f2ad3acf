// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

use crate::message::ErrorBody;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("API key not configured")]
    MissingApiKey,

    #[error("AI service error: {status}")]
    UpstreamStatus {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Failed to connect to the AI service")]
    Connectivity(#[source] reqwest::Error),

    /// Carries what was wrong with the upstream body; only logged.
    #[error("Unexpected response format from AI service")]
    UnexpectedFormat(String),

    #[error("Internal server error")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn log(&self) {
        match self {
            AppError::BadRequest(msg) => warn!(reason = %msg, "rejected chat request"),
            AppError::MissingApiKey => error!("DEEPSEEK_API_KEY is not configured"),
            AppError::UpstreamStatus { status, body } => {
                error!(status = status.as_u16(), body = %body, "HTTP error from AI service")
            }
            AppError::Connectivity(err) => error!(error = %err, "request to AI service failed"),
            AppError::UnexpectedFormat(detail) => {
                error!(detail = %detail, "unexpected response from AI service")
            }
            AppError::Internal(detail) => error!(detail = %detail, "unexpected error"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();
        let body = Json(ErrorBody {
            error: self.to_string(),
        });
        (self.status(), body).into_response()
    }
}
