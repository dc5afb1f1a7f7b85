use sea_orm::DbErr;

/// Failures while resolving the session principal from a bearer token
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("invalid or malformed session token")]
    InvalidToken,

    #[error("session token has expired")]
    ExpiredToken,

    #[error("session user no longer exists")]
    UnknownUser,

    #[error("database error: {0}")]
    Database(#[from] DbErr),
}

/// Failures from the user store
#[derive(Debug, thiserror::Error)]
pub enum UserStoreError {
    #[error("an account with that email already exists")]
    EmailTaken,

    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("user not found")]
    NotFound,

    #[error("password hashing failed: {0}")]
    Hash(String),

    #[error("database error: {0}")]
    Database(#[from] DbErr),
}

/// Domain outcomes of the registration workflow. The conflict variants are
/// expected, non-fatal states reported back to the caller.
#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    #[error("event not found")]
    EventNotFound,

    #[error("this event is already full")]
    EventFull,

    #[error("you are already registered for this event")]
    AlreadyRegistered,

    #[error("you are not registered for this event")]
    NotRegistered,

    #[error("you were not marked as interested")]
    NotInterested,

    #[error("database error: {0}")]
    Database(#[from] DbErr),
}

/// Authorization failures raised by the admin guards
#[derive(Debug, thiserror::Error)]
pub enum AccessError {
    #[error("administrator access required")]
    AdminRequired,

    #[error("this resource is outside your admin scope")]
    ScopeForbidden,
}
