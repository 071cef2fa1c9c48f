use serde::{Deserialize, Serialize};

/// Unified API error response format.
///
/// Every error leaving the service over HTTP uses this shape so clients can
/// route on `error_type` and localize on `code` without parsing free-form
/// messages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Short error title (mirrors the HTTP status reason phrase)
    pub error: String,

    /// Human-readable message
    pub message: String,

    /// HTTP status code
    pub status: u16,

    /// Error category for client-side routing, see [`error_types`]
    pub error_type: String,

    /// Stable machine-readable code, see [`error_codes`]
    pub code: String,

    /// Optional detail (development environments only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,

    /// Timestamp (ISO 8601)
    pub timestamp: String,
}

impl ErrorResponse {
    pub fn new(error: &str, message: &str, status: u16, error_type: &str, code: &str) -> Self {
        Self {
            error: error.to_string(),
            message: message.to_string(),
            status,
            error_type: error_type.to_string(),
            code: code.to_string(),
            details: None,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn with_details(mut self, details: String) -> Self {
        self.details = Some(details);
        self
    }
}

/// Stable error codes shared across the chat backend.
pub mod error_codes {
    // Accounts
    pub const USER_NOT_FOUND: &str = "USER_NOT_FOUND";
    pub const USER_ALREADY_EXISTS: &str = "USER_ALREADY_EXISTS";
    pub const INVALID_CREDENTIALS: &str = "INVALID_CREDENTIALS";

    // Bearer tokens
    pub const TOKEN_INVALID: &str = "TOKEN_INVALID";
    pub const TOKEN_MISSING: &str = "TOKEN_MISSING";

    // Chats
    pub const CHAT_NOT_FOUND: &str = "CHAT_NOT_FOUND";

    // Requests / system
    pub const INVALID_REQUEST: &str = "INVALID_REQUEST";
    pub const INTERNAL_SERVER_ERROR: &str = "INTERNAL_SERVER_ERROR";
}

/// Standard error categories.
pub mod error_types {
    pub const VALIDATION_ERROR: &str = "validation_error";
    pub const AUTHENTICATION_ERROR: &str = "authentication_error";
    pub const AUTHORIZATION_ERROR: &str = "authorization_error";
    pub const NOT_FOUND_ERROR: &str = "not_found_error";
    pub const CONFLICT_ERROR: &str = "conflict_error";
    pub const SERVER_ERROR: &str = "server_error";
}
