use crate::error::AppError;
use axum::{http::StatusCode, response::IntoResponse, Json};
use ::error_types::{error_codes, error_types, ErrorResponse};

/// Map domain errors to HTTP responses.
///
/// Security-sensitive paths stay undifferentiated on the wire: invalid and
/// expired tokens share one response, as do "chat missing" and "caller is
/// not a participant".
pub fn map_error(err: &AppError) -> (StatusCode, ErrorResponse) {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let (error_type, code) = match err {
        AppError::Validation(_) => (error_types::VALIDATION_ERROR, error_codes::INVALID_REQUEST),
        AppError::DuplicateLogin => (
            error_types::CONFLICT_ERROR,
            error_codes::USER_ALREADY_EXISTS,
        ),
        AppError::InvalidCredentials => (
            error_types::AUTHENTICATION_ERROR,
            error_codes::INVALID_CREDENTIALS,
        ),
        AppError::Unauthorized => (
            error_types::AUTHENTICATION_ERROR,
            error_codes::TOKEN_MISSING,
        ),
        AppError::InvalidToken | AppError::TokenExpired => (
            error_types::AUTHORIZATION_ERROR,
            error_codes::TOKEN_INVALID,
        ),
        AppError::ChatNotFound => (error_types::NOT_FOUND_ERROR, error_codes::CHAT_NOT_FOUND),
        AppError::Config(_) | AppError::StartServer(_) | AppError::Internal => (
            error_types::SERVER_ERROR,
            error_codes::INTERNAL_SERVER_ERROR,
        ),
    };

    let message = err.to_string();
    let response = ErrorResponse::new(
        match status {
            StatusCode::BAD_REQUEST => "Bad Request",
            StatusCode::UNAUTHORIZED => "Unauthorized",
            StatusCode::FORBIDDEN => "Forbidden",
            StatusCode::NOT_FOUND => "Not Found",
            StatusCode::INTERNAL_SERVER_ERROR => "Internal Server Error",
            _ => "Error",
        },
        &message,
        status.as_u16(),
        error_type,
        code,
    );

    (status, response)
}

pub fn into_response(err: AppError) -> impl IntoResponse {
    let (status, response) = map_error(&err);
    (status, Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_validation_to_400() {
        let (status, body) = map_error(&AppError::Validation("all fields are required".into()));
        assert_eq!(status.as_u16(), 400);
        assert_eq!(body.code, error_codes::INVALID_REQUEST);
    }

    #[test]
    fn duplicate_login_is_a_400_per_api_contract() {
        let (status, _) = map_error(&AppError::DuplicateLogin);
        assert_eq!(status.as_u16(), 400);
    }

    #[test]
    fn missing_token_is_401_and_bad_token_is_403() {
        let (missing, _) = map_error(&AppError::Unauthorized);
        let (invalid, _) = map_error(&AppError::InvalidToken);
        assert_eq!(missing.as_u16(), 401);
        assert_eq!(invalid.as_u16(), 403);
    }

    #[test]
    fn invalid_and_expired_tokens_are_indistinguishable_on_the_wire() {
        let (s1, b1) = map_error(&AppError::InvalidToken);
        let (s2, b2) = map_error(&AppError::TokenExpired);
        assert_eq!(s1, s2);
        assert_eq!(b1.message, b2.message);
        assert_eq!(b1.code, b2.code);
        assert_eq!(b1.error_type, b2.error_type);
    }

    #[test]
    fn maps_config_error_to_500() {
        let (status, body) = map_error(&AppError::Config("missing".into()));
        assert_eq!(status.as_u16(), 500);
        assert!(body.message.contains("config"));
    }
}
