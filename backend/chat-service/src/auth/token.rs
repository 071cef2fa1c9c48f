use crate::error::{AppError, AppResult};
use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};

const DEFAULT_VALIDATION_LEEWAY: u64 = 30; // seconds of clock skew tolerance

/// JWT claims carried by every issued token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id)
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Issues and verifies HS256-signed identity assertions.
///
/// The signing secret is injected at construction so tests can run with
/// ephemeral secrets and deployments can rotate theirs through config.
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &str, ttl_hours: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::hours(ttl_hours),
        }
    }

    /// Produce a signed token asserting `user_id` for the configured TTL.
    pub fn issue(&self, user_id: u64) -> AppResult<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding).map_err(|e| {
            tracing::error!(error = %e, "failed to encode token");
            AppError::Internal
        })
    }

    /// Validate signature and expiry, returning the asserted user id.
    pub fn verify(&self, token: &str) -> AppResult<u64> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = DEFAULT_VALIDATION_LEEWAY;

        match decode::<Claims>(token, &self.decoding, &validation) {
            Ok(data) => data.claims.sub.parse().map_err(|_| AppError::InvalidToken),
            Err(e) => match e.kind() {
                ErrorKind::ExpiredSignature => Err(AppError::TokenExpired),
                _ => Err(AppError::InvalidToken),
            },
        }
    }
}
