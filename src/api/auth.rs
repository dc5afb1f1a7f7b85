use std::sync::Arc;

use poem_openapi::{payload::Json, OpenApi, Tags};

use crate::api::{helpers, BearerAuth};
use crate::errors::AuthError;
use crate::services::TokenService;
use crate::stores::{RegistrationStore, UserStore};
use crate::types::dto::auth::{
    AccountResponse, LoginRequest, RegisterRequest, SessionResponse, SettingsResponse,
    UpdateSettingsRequest, UserProfile,
};
use crate::types::dto::common::MessageResponse;

const MIN_PASSWORD_CHARS: usize = 8;

/// Authentication and account API endpoints
pub struct AuthApi {
    users: Arc<UserStore>,
    registrations: Arc<RegistrationStore>,
    tokens: Arc<TokenService>,
}

impl AuthApi {
    /// Create a new AuthApi with the given stores and TokenService
    pub fn new(
        users: Arc<UserStore>,
        registrations: Arc<RegistrationStore>,
        tokens: Arc<TokenService>,
    ) -> Self {
        Self {
            users,
            registrations,
            tokens,
        }
    }
}

/// API tags for authentication endpoints
#[derive(Tags)]
enum AuthTags {
    /// Authentication and account endpoints
    Authentication,
}

#[OpenApi(prefix_path = "/auth")]
impl AuthApi {
    /// Create a new account
    ///
    /// Validates the whole form at once and reports every problem as a
    /// message list; nothing is stored unless all rules pass.
    #[oai(path = "/register", method = "post", tag = "AuthTags::Authentication")]
    async fn register(
        &self,
        body: Json<RegisterRequest>,
    ) -> Result<Json<MessageResponse>, AuthError> {
        let name = body.name.trim();
        let email = body.email.trim().to_lowercase();

        let mut errors = Vec::new();
        if name.is_empty() {
            errors.push("Name is required.".to_string());
        }
        if email.is_empty() {
            errors.push("Email is required.".to_string());
        } else if self.users.email_exists(&email).await? {
            errors.push("An account with that email already exists.".to_string());
        }
        if body.password.chars().count() < MIN_PASSWORD_CHARS {
            errors.push("Password must be at least 8 characters long.".to_string());
        }
        if body.password != body.confirm_password {
            errors.push("Passwords do not match.".to_string());
        }

        if !errors.is_empty() {
            return Err(AuthError::validation_failed(errors));
        }

        self.users
            .create(name.to_string(), email, &body.password)
            .await?;

        Ok(Json(MessageResponse::new(
            "Registration successful. Please sign in.",
        )))
    }

    /// Sign in with email and password
    ///
    /// Returns a bearer session token. The failure message never reveals
    /// whether the email exists.
    #[oai(path = "/login", method = "post", tag = "AuthTags::Authentication")]
    async fn login(&self, body: Json<LoginRequest>) -> Result<Json<SessionResponse>, AuthError> {
        let email = body.email.trim().to_lowercase();

        let user = self.users.verify_credentials(&email, &body.password).await?;
        let access_token = self.tokens.generate(&user.id).map_err(AuthError::from)?;

        Ok(Json(SessionResponse {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: self.tokens.expires_in_seconds(),
            user: UserProfile::from_model(&user),
        }))
    }

    /// Sign out
    ///
    /// Bearer sessions are discarded client-side; this validates the
    /// session and acknowledges the teardown.
    #[oai(path = "/logout", method = "get", tag = "AuthTags::Authentication")]
    async fn logout(&self, auth: BearerAuth) -> Result<Json<MessageResponse>, AuthError> {
        helpers::current_user(&self.users, &self.tokens, &auth.0)
            .await
            .map_err(AuthError::from)?;

        Ok(Json(MessageResponse::new("You have been signed out.")))
    }

    /// Account overview for the signed-in user
    #[oai(path = "/account", method = "get", tag = "AuthTags::Authentication")]
    async fn account(&self, auth: BearerAuth) -> Result<Json<AccountResponse>, AuthError> {
        let user = helpers::current_user(&self.users, &self.tokens, &auth.0)
            .await
            .map_err(AuthError::from)?;

        let registration_count = self.registrations.count_for_user(&user.id).await?;

        Ok(Json(AccountResponse {
            user: UserProfile::from_model(&user),
            registration_count: registration_count as i64,
        }))
    }

    /// Read profile settings
    #[oai(path = "/settings", method = "get", tag = "AuthTags::Authentication")]
    async fn get_settings(&self, auth: BearerAuth) -> Result<Json<SettingsResponse>, AuthError> {
        let user = helpers::current_user(&self.users, &self.tokens, &auth.0)
            .await
            .map_err(AuthError::from)?;

        Ok(Json(SettingsResponse {
            display_name: user.name,
        }))
    }

    /// Update profile settings
    ///
    /// Only the current principal can be mutated; there is no cross-user
    /// path. The password change is optional.
    #[oai(path = "/settings", method = "post", tag = "AuthTags::Authentication")]
    async fn update_settings(
        &self,
        auth: BearerAuth,
        body: Json<UpdateSettingsRequest>,
    ) -> Result<Json<MessageResponse>, AuthError> {
        let user = helpers::current_user(&self.users, &self.tokens, &auth.0)
            .await
            .map_err(AuthError::from)?;

        let display_name = body.display_name.trim();
        let password = body.password.as_deref().filter(|p| !p.is_empty());

        let mut errors = Vec::new();
        if display_name.is_empty() {
            errors.push("Display name is required.".to_string());
        }
        if let Some(password) = password {
            if password.chars().count() < MIN_PASSWORD_CHARS {
                errors.push("New password must be at least 8 characters long.".to_string());
            }
            if Some(password) != body.confirm_password.as_deref() {
                errors.push("Passwords do not match.".to_string());
            }
        }

        if !errors.is_empty() {
            return Err(AuthError::validation_failed(errors));
        }

        self.users
            .update_profile(user, display_name.to_string(), password)
            .await?;

        Ok(Json(MessageResponse::new("Profile updated successfully.")))
    }
}
