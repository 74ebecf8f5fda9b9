//! Common error types for the gateway and its libraries.
//!
//! This crate provides unified error handling across the token codec,
//! the access gate and the HTTP gateway.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application-level errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Token and authorization errors.
///
/// The first four variants are the outcomes of token verification. They are
/// all client-input errors and are never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Malformed token")]
    MalformedToken,

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Malformed token claims")]
    MalformedClaims,

    #[error("Token expired")]
    TokenExpired,

    #[error("Token lifetime must be a positive number of seconds")]
    InvalidTtl,

    #[error("Token subject must not be empty")]
    InvalidSubject,

    #[error("Signing secret must not be empty")]
    EmptySecret,

    #[error("Token creation failed: {0}")]
    TokenCreationFailed(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Forbidden")]
    Forbidden,
}

impl AuthError {
    /// Whether this error came out of verifying a presented token.
    pub fn is_verification_failure(&self) -> bool {
        matches!(
            self,
            AuthError::MalformedToken
                | AuthError::InvalidSignature
                | AuthError::MalformedClaims
                | AuthError::TokenExpired
        )
    }
}

/// Configuration loading errors. These are fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Missing required setting: {0}")]
    MissingKey(&'static str),
}

/// Error response for API clients.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl ErrorResponse {
    /// Create a new error response.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl From<AuthError> for ErrorResponse {
    fn from(err: AuthError) -> Self {
        // Verification failures share one code so clients cannot tell which check failed.
        let (code, message) = match &err {
            AuthError::MalformedToken
            | AuthError::InvalidSignature
            | AuthError::MalformedClaims
            | AuthError::TokenExpired
            | AuthError::Unauthorized => ("AUTH_UNAUTHORIZED", "Unauthorized"),
            AuthError::Forbidden => ("AUTH_FORBIDDEN", "Access forbidden"),
            AuthError::InvalidTtl | AuthError::InvalidSubject | AuthError::EmptySecret => {
                ("AUTH_INVALID_REQUEST", "Invalid token request")
            }
            AuthError::TokenCreationFailed(_) => {
                ("AUTH_TOKEN_CREATION_FAILED", "Failed to create token")
            }
        };
        Self::new(code, message)
    }
}
