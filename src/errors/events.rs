use poem_openapi::{payload::Json, ApiResponse, Object};
use sea_orm::DbErr;
use std::fmt;

use crate::errors::internal::{RegistrationError, SessionError};
use crate::errors::ValidationErrorResponse;

/// Standardized error response for event endpoints
#[derive(Object, Debug)]
pub struct EventErrorResponse {
    /// Error code identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code
    pub status_code: u16,
}

/// Event catalog and registration workflow error types. The 409 variants
/// are non-fatal conflicts the client surfaces as warnings or notices.
#[derive(ApiResponse, Debug)]
pub enum EventError {
    /// One or more form fields failed validation
    #[oai(status = 400)]
    ValidationFailed(Json<ValidationErrorResponse>),

    /// Invalid or malformed session token
    #[oai(status = 401)]
    InvalidToken(Json<EventErrorResponse>),

    /// Session token has expired
    #[oai(status = 401)]
    ExpiredToken(Json<EventErrorResponse>),

    /// Event not found
    #[oai(status = 404)]
    NotFound(Json<EventErrorResponse>),

    /// The event has no seats remaining
    #[oai(status = 409)]
    EventFull(Json<EventErrorResponse>),

    /// A registration already exists for this (user, event) pair
    #[oai(status = 409)]
    AlreadyRegistered(Json<EventErrorResponse>),

    /// No registration exists for this (user, event) pair
    #[oai(status = 409)]
    NotRegistered(Json<EventErrorResponse>),

    /// No interest marker exists for this (user, event) pair
    #[oai(status = 409)]
    NotInterested(Json<EventErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<EventErrorResponse>),
}

impl EventError {
    /// Create a ValidationFailed error from a message list
    pub fn validation_failed(messages: Vec<String>) -> Self {
        EventError::ValidationFailed(Json(ValidationErrorResponse::new(messages)))
    }

    /// Create an InvalidToken error
    pub fn invalid_token() -> Self {
        EventError::InvalidToken(Json(EventErrorResponse {
            error: "invalid_token".to_string(),
            message: "Invalid or malformed session token".to_string(),
            status_code: 401,
        }))
    }

    /// Create an ExpiredToken error
    pub fn expired_token() -> Self {
        EventError::ExpiredToken(Json(EventErrorResponse {
            error: "expired_token".to_string(),
            message: "Session token has expired".to_string(),
            status_code: 401,
        }))
    }

    /// Create a NotFound error
    pub fn not_found() -> Self {
        EventError::NotFound(Json(EventErrorResponse {
            error: "event_not_found".to_string(),
            message: "Event not found".to_string(),
            status_code: 404,
        }))
    }

    /// Create an EventFull conflict
    pub fn event_full() -> Self {
        EventError::EventFull(Json(EventErrorResponse {
            error: "event_full".to_string(),
            message: "This event is already full.".to_string(),
            status_code: 409,
        }))
    }

    /// Create an AlreadyRegistered conflict
    pub fn already_registered() -> Self {
        EventError::AlreadyRegistered(Json(EventErrorResponse {
            error: "already_registered".to_string(),
            message: "You are already registered for this event.".to_string(),
            status_code: 409,
        }))
    }

    /// Create a NotRegistered conflict
    pub fn not_registered() -> Self {
        EventError::NotRegistered(Json(EventErrorResponse {
            error: "not_registered".to_string(),
            message: "You are not registered for this event.".to_string(),
            status_code: 409,
        }))
    }

    /// Create a NotInterested conflict
    pub fn not_interested() -> Self {
        EventError::NotInterested(Json(EventErrorResponse {
            error: "not_interested".to_string(),
            message: "You were not marked as interested.".to_string(),
            status_code: 409,
        }))
    }

    /// Create an InternalError
    pub fn internal_error(message: String) -> Self {
        EventError::InternalError(Json(EventErrorResponse {
            error: "internal_error".to_string(),
            message,
            status_code: 500,
        }))
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        match self {
            EventError::ValidationFailed(json) => json.0.messages.join(" "),
            EventError::InvalidToken(json)
            | EventError::ExpiredToken(json)
            | EventError::NotFound(json)
            | EventError::EventFull(json)
            | EventError::AlreadyRegistered(json)
            | EventError::NotRegistered(json)
            | EventError::NotInterested(json)
            | EventError::InternalError(json) => json.0.message.clone(),
        }
    }
}

impl fmt::Display for EventError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl From<SessionError> for EventError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::InvalidToken | SessionError::UnknownUser => EventError::invalid_token(),
            SessionError::ExpiredToken => EventError::expired_token(),
            SessionError::Database(e) => {
                EventError::internal_error(format!("Database error: {}", e))
            }
        }
    }
}

impl From<RegistrationError> for EventError {
    fn from(err: RegistrationError) -> Self {
        match err {
            RegistrationError::EventNotFound => EventError::not_found(),
            RegistrationError::EventFull => EventError::event_full(),
            RegistrationError::AlreadyRegistered => EventError::already_registered(),
            RegistrationError::NotRegistered => EventError::not_registered(),
            RegistrationError::NotInterested => EventError::not_interested(),
            RegistrationError::Database(e) => {
                EventError::internal_error(format!("Database error: {}", e))
            }
        }
    }
}

impl From<DbErr> for EventError {
    fn from(err: DbErr) -> Self {
        EventError::internal_error(format!("Database error: {}", err))
    }
}
