use dotenvy::dotenv;
use std::env;

// Minimum length for an HS256 signing secret
const MIN_SECRET_LEN: usize = 32;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub jwt_secret: String,
    pub token_ttl_hours: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, crate::error::AppError> {
        dotenv().ok();
        let port = env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3001);

        let jwt_secret = env::var("JWT_SECRET")
            .map_err(|_| crate::error::AppError::Config("JWT_SECRET missing".into()))?;
        if jwt_secret.trim().len() < MIN_SECRET_LEN {
            return Err(crate::error::AppError::Config(format!(
                "JWT_SECRET must be at least {MIN_SECRET_LEN} characters"
            )));
        }

        let token_ttl_hours = env::var("TOKEN_TTL_HOURS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(24);

        Ok(Self {
            port,
            jwt_secret,
            token_ttl_hours,
        })
    }

    #[cfg(test)]
    pub fn test_defaults() -> Self {
        Self {
            port: 3001,
            jwt_secret: "test-secret-test-secret-test-secret!".into(),
            token_ttl_hours: 24,
        }
    }
}
