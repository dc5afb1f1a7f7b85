use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use uuid::Uuid;

use crate::errors::internal::UserStoreError;
use crate::services::crypto;
use crate::types::db::user::{self, Entity as User};

/// UserStore manages account rows and credential verification
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create a new UserStore with the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Whether an account already exists for the given (lowercased) email
    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        let existing = User::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await?;
        Ok(existing.is_some())
    }

    /// Create a regular (non-admin) account
    ///
    /// # Arguments
    /// * `name` - Display name
    /// * `email` - Lowercased email address, must be unique
    /// * `password` - Plaintext password to hash and store
    ///
    /// # Returns
    /// * `Ok(user::Model)` - The created account
    /// * `Err(UserStoreError)` - EmailTaken when the email exists, or a
    ///   hashing/database failure
    pub async fn create(
        &self,
        name: String,
        email: String,
        password: &str,
    ) -> Result<user::Model, UserStoreError> {
        if self.email_exists(&email).await? {
            return Err(UserStoreError::EmailTaken);
        }

        let password_hash = crypto::hash_password(password).map_err(UserStoreError::Hash)?;

        let new_user = user::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            name: Set(name),
            email: Set(email),
            password_hash: Set(password_hash),
            is_admin: Set(false),
            admin_scope: Set("super".to_string()),
            created_at: Set(Utc::now().naive_utc()),
        };

        new_user.insert(&self.db).await.map_err(|e| {
            // Unique index race: two concurrent registrations for one email
            if e.to_string().contains("UNIQUE") {
                UserStoreError::EmailTaken
            } else {
                UserStoreError::Database(e)
            }
        })
    }

    /// Verify credentials and return the account on success
    ///
    /// Unknown emails and wrong passwords collapse into the same
    /// `InvalidCredentials` error so accounts cannot be enumerated.
    pub async fn verify_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<user::Model, UserStoreError> {
        let user = User::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await?
            .ok_or(UserStoreError::InvalidCredentials)?;

        if !crypto::verify_password(password, &user.password_hash) {
            return Err(UserStoreError::InvalidCredentials);
        }

        Ok(user)
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<user::Model>, DbErr> {
        User::find_by_id(id).one(&self.db).await
    }

    /// Update the current principal's own profile. No cross-user mutation
    /// path exists.
    pub async fn update_profile(
        &self,
        user: user::Model,
        name: String,
        new_password: Option<&str>,
    ) -> Result<user::Model, UserStoreError> {
        let mut active: user::ActiveModel = user.into();
        active.name = Set(name);
        if let Some(password) = new_password {
            let password_hash = crypto::hash_password(password).map_err(UserStoreError::Hash)?;
            active.password_hash = Set(password_hash);
        }
        Ok(active.update(&self.db).await?)
    }
}
