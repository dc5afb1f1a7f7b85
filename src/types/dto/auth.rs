use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use crate::types::db::user;

/// Request model for account registration
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Display name
    pub name: String,

    /// Email address (stored lowercased, must be unique)
    pub email: String,

    /// Password (at least 8 characters)
    pub password: String,

    /// Password confirmation, must match `password`
    pub confirm_password: String,
}

/// Request model for signing in
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Email address
    pub email: String,

    /// Password
    pub password: String,
}

/// The authenticated user's public profile
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct UserProfile {
    /// User ID (UUID)
    pub id: String,

    /// Display name
    pub name: String,

    /// Email address
    pub email: String,

    /// Whether the account has admin privileges
    pub is_admin: bool,

    /// Admin scope: a category name, or "super" for unrestricted access
    pub admin_scope: String,
}

impl UserProfile {
    pub fn from_model(user: &user::Model) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            is_admin: user.is_admin,
            admin_scope: user.admin_scope.clone(),
        }
    }
}

/// Response model for a successful login
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    /// Bearer session token
    pub access_token: String,

    /// Token type (always "Bearer")
    pub token_type: String,

    /// Number of seconds until the session token expires
    pub expires_in: i64,

    /// The signed-in user
    pub user: UserProfile,
}

/// Response model for the account overview
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct AccountResponse {
    /// The signed-in user
    pub user: UserProfile,

    /// How many events this user is registered for
    pub registration_count: i64,
}

/// Response model for reading profile settings
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct SettingsResponse {
    /// Current display name
    pub display_name: String,
}

/// Request model for updating profile settings. The password fields are
/// optional; when `password` is present it must meet the length rule and
/// match its confirmation.
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct UpdateSettingsRequest {
    /// New display name (required, non-blank)
    pub display_name: String,

    /// Optional new password
    pub password: Option<String>,

    /// Confirmation for the new password
    pub confirm_password: Option<String>,
}
