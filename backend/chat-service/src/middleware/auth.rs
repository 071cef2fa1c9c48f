use crate::error::AppError;
use crate::state::AppState;
use axum::extract::State;

/// Middleware to extract the bearer token and add the caller id to extensions.
///
/// Missing or malformed header rejects with 401; a present but invalid or
/// expired token rejects with 403. Neither carries further detail.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut req: axum::extract::Request,
    next: axum::middleware::Next,
) -> Result<axum::response::Response, AppError> {
    let auth_header = req
        .headers()
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or(AppError::Unauthorized)?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or(AppError::Unauthorized)?;

    // Verify signature and expiry, extract the subject
    let user_id = state.tokens.verify(token)?;

    req.extensions_mut().insert(user_id);

    Ok(next.run(req).await)
}
