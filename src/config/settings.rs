use std::env;

/// Fallbacks for local/demo runs. Both are insecure and must be overridden
/// in any real deployment.
const DEFAULT_DATABASE_URL: &str = "sqlite://events.db?mode=rwc";
const DEFAULT_JWT_SECRET: &str = "change-me-super-secret";

/// Application configuration sourced from the environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt_secret: String,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    /// Load configuration from environment variables, falling back to the
    /// documented local-use defaults
    pub fn from_env() -> Self {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let jwt_secret = match env::var("JWT_SECRET") {
            Ok(secret) => secret,
            Err(_) => {
                tracing::warn!(
                    "JWT_SECRET is not set; using the insecure demo default. \
                     Set JWT_SECRET before any real deployment."
                );
                DEFAULT_JWT_SECRET.to_string()
            }
        };

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000);

        Self {
            database_url,
            jwt_secret,
            host,
            port,
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
