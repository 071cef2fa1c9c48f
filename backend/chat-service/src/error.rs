use crate::middleware::error_handling;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error_handling::into_response(self).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("server start failure: {0}")]
    StartServer(String),

    #[error("{0}")]
    Validation(String),

    #[error("a user with this login already exists")]
    DuplicateLogin,

    #[error("invalid login or password")]
    InvalidCredentials,

    #[error("unauthorized")]
    Unauthorized,

    // Invalid and expired tokens stay distinct internally but must read
    // identically on the wire: callers learn nothing beyond "forbidden".
    #[error("forbidden")]
    InvalidToken,

    #[error("forbidden")]
    TokenExpired,

    // Covers both a missing chat and a caller who is not a participant, so
    // non-participants cannot probe which chat ids exist.
    #[error("chat not found")]
    ChatNotFound,

    #[error("internal server error")]
    Internal,
}

impl AppError {
    /// Returns HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            AppError::Validation(_) => 400,
            // The original API reports duplicate logins as a plain 400
            AppError::DuplicateLogin => 400,
            AppError::InvalidCredentials => 401,
            AppError::Unauthorized => 401,
            AppError::InvalidToken | AppError::TokenExpired => 403,
            AppError::ChatNotFound => 404,
            AppError::Config(_) | AppError::StartServer(_) | AppError::Internal => 500,
        }
    }
}
