// Errors layer - Error type definitions
pub mod admin;
pub mod auth;
pub mod events;
pub mod internal;

// Re-exports for convenience
pub use admin::AdminError;
pub use auth::AuthError;
pub use events::EventError;
pub use internal::{AccessError, RegistrationError, SessionError, UserStoreError};

use poem_openapi::Object;

/// Error body for request validation failures. Carries the full list of
/// human-readable messages so the client can re-render the form with every
/// problem at once.
#[derive(Object, Debug)]
pub struct ValidationErrorResponse {
    /// Error code identifier
    pub error: String,

    /// Human-readable validation messages
    pub messages: Vec<String>,

    /// HTTP status code
    pub status_code: u16,
}

impl ValidationErrorResponse {
    pub fn new(messages: Vec<String>) -> Self {
        Self {
            error: "validation_failed".to_string(),
            messages,
            status_code: 400,
        }
    }
}
