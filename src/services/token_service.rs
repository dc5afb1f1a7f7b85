use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::errors::internal::SessionError;
use crate::types::internal::auth::Claims;

/// Manages session token generation and validation. Sessions are stateless
/// HS256 JWTs; signing out is a client-side discard.
pub struct TokenService {
    jwt_secret: String,
    session_expiration_minutes: i64,
}

impl TokenService {
    /// Create a new TokenService with the given signing secret
    pub fn new(jwt_secret: String) -> Self {
        Self {
            jwt_secret,
            session_expiration_minutes: 60 * 24, // one day
        }
    }

    /// Number of seconds a freshly minted session token is valid for
    pub fn expires_in_seconds(&self) -> i64 {
        self.session_expiration_minutes * 60
    }

    /// Generate a session token for the given user id
    ///
    /// # Returns
    /// * `Result<String, SessionError>` - The encoded token or an error
    pub fn generate(&self, user_id: &str) -> Result<String, SessionError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user_id.to_string(),
            exp: now + self.expires_in_seconds(),
            iat: now,
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )
        .map_err(|_| SessionError::InvalidToken)
    }

    /// Validate a session token and return its claims
    ///
    /// # Returns
    /// * `Result<Claims, SessionError>` - The decoded claims or an error
    pub fn validate(&self, token: &str) -> Result<Claims, SessionError> {
        let validation = Validation::new(Algorithm::HS256);

        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_bytes()),
            &validation,
        )
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => SessionError::ExpiredToken,
            _ => SessionError::InvalidToken,
        })?;

        Ok(token_data.claims)
    }
}
