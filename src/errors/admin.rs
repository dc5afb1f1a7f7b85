use poem_openapi::{payload::Json, ApiResponse, Object};
use sea_orm::DbErr;
use std::fmt;

use crate::errors::internal::{AccessError, SessionError};
use crate::errors::ValidationErrorResponse;

/// Standardized error response for admin endpoints
#[derive(Object, Debug)]
pub struct AdminErrorResponse {
    /// Error code identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code
    pub status_code: u16,
}

/// Admin operation error types. `AdminRequired` is the page-level refusal
/// for signed-in non-admins; `ScopeForbidden` is the hard rejection for a
/// specific resource outside a scoped admin's category.
#[derive(ApiResponse, Debug)]
pub enum AdminError {
    /// One or more form fields failed validation
    #[oai(status = 400)]
    ValidationFailed(Json<ValidationErrorResponse>),

    /// Invalid or malformed session token
    #[oai(status = 401)]
    InvalidToken(Json<AdminErrorResponse>),

    /// Session token has expired
    #[oai(status = 401)]
    ExpiredToken(Json<AdminErrorResponse>),

    /// Administrator access required
    #[oai(status = 403)]
    AdminRequired(Json<AdminErrorResponse>),

    /// Resource outside the admin's category scope
    #[oai(status = 403)]
    ScopeForbidden(Json<AdminErrorResponse>),

    /// Event not found
    #[oai(status = 404)]
    EventNotFound(Json<AdminErrorResponse>),

    /// Registration not found
    #[oai(status = 404)]
    RegistrationNotFound(Json<AdminErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<AdminErrorResponse>),
}

impl AdminError {
    /// Create a ValidationFailed error from a message list
    pub fn validation_failed(messages: Vec<String>) -> Self {
        AdminError::ValidationFailed(Json(ValidationErrorResponse::new(messages)))
    }

    /// Create an InvalidToken error
    pub fn invalid_token() -> Self {
        AdminError::InvalidToken(Json(AdminErrorResponse {
            error: "invalid_token".to_string(),
            message: "Invalid or malformed session token".to_string(),
            status_code: 401,
        }))
    }

    /// Create an ExpiredToken error
    pub fn expired_token() -> Self {
        AdminError::ExpiredToken(Json(AdminErrorResponse {
            error: "expired_token".to_string(),
            message: "Session token has expired".to_string(),
            status_code: 401,
        }))
    }

    /// Create an AdminRequired error
    pub fn admin_required() -> Self {
        AdminError::AdminRequired(Json(AdminErrorResponse {
            error: "admin_required".to_string(),
            message: "Administrator access required.".to_string(),
            status_code: 403,
        }))
    }

    /// Create a ScopeForbidden error
    pub fn scope_forbidden() -> Self {
        AdminError::ScopeForbidden(Json(AdminErrorResponse {
            error: "scope_forbidden".to_string(),
            message: "This resource is outside your admin scope.".to_string(),
            status_code: 403,
        }))
    }

    /// Create an EventNotFound error
    pub fn event_not_found() -> Self {
        AdminError::EventNotFound(Json(AdminErrorResponse {
            error: "event_not_found".to_string(),
            message: "Event not found".to_string(),
            status_code: 404,
        }))
    }

    /// Create a RegistrationNotFound error
    pub fn registration_not_found() -> Self {
        AdminError::RegistrationNotFound(Json(AdminErrorResponse {
            error: "registration_not_found".to_string(),
            message: "Registration not found".to_string(),
            status_code: 404,
        }))
    }

    /// Create an InternalError
    pub fn internal_error(message: String) -> Self {
        AdminError::InternalError(Json(AdminErrorResponse {
            error: "internal_error".to_string(),
            message,
            status_code: 500,
        }))
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        match self {
            AdminError::ValidationFailed(json) => json.0.messages.join(" "),
            AdminError::InvalidToken(json)
            | AdminError::ExpiredToken(json)
            | AdminError::AdminRequired(json)
            | AdminError::ScopeForbidden(json)
            | AdminError::EventNotFound(json)
            | AdminError::RegistrationNotFound(json)
            | AdminError::InternalError(json) => json.0.message.clone(),
        }
    }
}

impl fmt::Display for AdminError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl From<SessionError> for AdminError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::InvalidToken | SessionError::UnknownUser => AdminError::invalid_token(),
            SessionError::ExpiredToken => AdminError::expired_token(),
            SessionError::Database(e) => {
                AdminError::internal_error(format!("Database error: {}", e))
            }
        }
    }
}

impl From<AccessError> for AdminError {
    fn from(err: AccessError) -> Self {
        match err {
            AccessError::AdminRequired => AdminError::admin_required(),
            AccessError::ScopeForbidden => AdminError::scope_forbidden(),
        }
    }
}

impl From<DbErr> for AdminError {
    fn from(err: DbErr) -> Self {
        AdminError::internal_error(format!("Database error: {}", err))
    }
}
