// API layer - HTTP endpoints
pub mod admin;
pub mod auth;
pub mod events;
pub mod health;
pub mod helpers;

pub use admin::AdminApi;
pub use auth::AuthApi;
pub use events::EventsApi;
pub use health::HealthApi;

use poem_openapi::{auth::Bearer, SecurityScheme};

/// Bearer session token authentication
#[derive(SecurityScheme)]
#[oai(
    ty = "bearer",
    key_name = "Authorization",
    key_in = "header",
    bearer_format = "JWT"
)]
pub struct BearerAuth(pub Bearer);
