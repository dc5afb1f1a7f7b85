use poem_openapi::{payload::Json, ApiResponse, Object};
use sea_orm::DbErr;
use std::fmt;

use crate::errors::internal::{SessionError, UserStoreError};
use crate::errors::ValidationErrorResponse;

/// Standardized error response for authentication endpoints
#[derive(Object, Debug)]
pub struct AuthErrorResponse {
    /// Error code identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code
    pub status_code: u16,
}

/// Authentication error types
#[derive(ApiResponse, Debug)]
pub enum AuthError {
    /// One or more form fields failed validation
    #[oai(status = 400)]
    ValidationFailed(Json<ValidationErrorResponse>),

    /// Invalid email or password
    #[oai(status = 401)]
    InvalidCredentials(Json<AuthErrorResponse>),

    /// Invalid or malformed session token
    #[oai(status = 401)]
    InvalidToken(Json<AuthErrorResponse>),

    /// Session token has expired
    #[oai(status = 401)]
    ExpiredToken(Json<AuthErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<AuthErrorResponse>),
}

impl AuthError {
    /// Create a ValidationFailed error from a message list
    pub fn validation_failed(messages: Vec<String>) -> Self {
        AuthError::ValidationFailed(Json(ValidationErrorResponse::new(messages)))
    }

    /// Create an InvalidCredentials error. The message is deliberately
    /// identical for unknown emails and wrong passwords.
    pub fn invalid_credentials() -> Self {
        AuthError::InvalidCredentials(Json(AuthErrorResponse {
            error: "invalid_credentials".to_string(),
            message: "Invalid email or password".to_string(),
            status_code: 401,
        }))
    }

    /// Create an InvalidToken error
    pub fn invalid_token() -> Self {
        AuthError::InvalidToken(Json(AuthErrorResponse {
            error: "invalid_token".to_string(),
            message: "Invalid or malformed session token".to_string(),
            status_code: 401,
        }))
    }

    /// Create an ExpiredToken error
    pub fn expired_token() -> Self {
        AuthError::ExpiredToken(Json(AuthErrorResponse {
            error: "expired_token".to_string(),
            message: "Session token has expired".to_string(),
            status_code: 401,
        }))
    }

    /// Create an InternalError
    pub fn internal_error(message: String) -> Self {
        AuthError::InternalError(Json(AuthErrorResponse {
            error: "internal_error".to_string(),
            message,
            status_code: 500,
        }))
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        match self {
            AuthError::ValidationFailed(json) => json.0.messages.join(" "),
            AuthError::InvalidCredentials(json) => json.0.message.clone(),
            AuthError::InvalidToken(json) => json.0.message.clone(),
            AuthError::ExpiredToken(json) => json.0.message.clone(),
            AuthError::InternalError(json) => json.0.message.clone(),
        }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl From<SessionError> for AuthError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::InvalidToken | SessionError::UnknownUser => AuthError::invalid_token(),
            SessionError::ExpiredToken => AuthError::expired_token(),
            SessionError::Database(e) => AuthError::internal_error(format!("Database error: {}", e)),
        }
    }
}

impl From<UserStoreError> for AuthError {
    fn from(err: UserStoreError) -> Self {
        match err {
            UserStoreError::InvalidCredentials | UserStoreError::NotFound => {
                AuthError::invalid_credentials()
            }
            UserStoreError::EmailTaken => AuthError::validation_failed(vec![
                "An account with that email already exists.".to_string(),
            ]),
            UserStoreError::Hash(e) => {
                AuthError::internal_error(format!("Password hashing error: {}", e))
            }
            UserStoreError::Database(e) => {
                AuthError::internal_error(format!("Database error: {}", e))
            }
        }
    }
}

impl From<DbErr> for AuthError {
    fn from(err: DbErr) -> Self {
        AuthError::internal_error(format!("Database error: {}", err))
    }
}
