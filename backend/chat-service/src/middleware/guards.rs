//! Extractors that enforce the authentication contract at the type level,
//! so handlers cannot accidentally skip the caller-identity check.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::error::AppError;

/// The authenticated caller, resolved from the bearer token by the auth
/// middleware.
#[derive(Debug, Clone, Copy)]
pub struct User {
    pub id: u64,
}

#[async_trait]
impl<S> FromRequestParts<S> for User
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Set by the auth middleware; absent means the route was wired
        // outside the secured router.
        let user_id = parts
            .extensions
            .get::<u64>()
            .copied()
            .ok_or(AppError::Unauthorized)?;

        Ok(User { id: user_id })
    }
}
