use std::sync::Arc;

use poem::{listener::TcpListener, Route, Server};
use poem_openapi::OpenApiService;
use sea_orm::{Database, DatabaseConnection};

use eventmanage_backend::api::{AdminApi, AuthApi, EventsApi, HealthApi};
use eventmanage_backend::config::{init_logging, AppConfig};
use eventmanage_backend::seed;
use eventmanage_backend::services::TokenService;
use eventmanage_backend::stores::{EventStore, RegistrationStore, UserStore};
use migration::{Migrator, MigratorTrait};

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    init_logging().expect("Failed to initialize logging");

    let config = AppConfig::from_env();

    // Connect to database and bring the schema up to date
    let db: DatabaseConnection = Database::connect(&config.database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!(database_url = %config.database_url, "connected to database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    tracing::info!("database migrations completed");

    // First-time setup: admin accounts and the sample catalog
    seed::seed_admins(&db).await.expect("Failed to seed admin accounts");
    seed::seed_sample_events(&db)
        .await
        .expect("Failed to seed sample events");

    let users = Arc::new(UserStore::new(db.clone()));
    let events = Arc::new(EventStore::new(db.clone()));
    let registrations = Arc::new(RegistrationStore::new(db.clone()));
    let tokens = Arc::new(TokenService::new(config.jwt_secret.clone()));

    let auth_api = AuthApi::new(users.clone(), registrations.clone(), tokens.clone());
    let events_api = EventsApi::new(
        events.clone(),
        registrations.clone(),
        users.clone(),
        tokens.clone(),
    );
    let admin_api = AdminApi::new(events, registrations, users, tokens);

    let api_service = OpenApiService::new(
        (HealthApi, auth_api, events_api, admin_api),
        "Campus Event Management API",
        "1.0.0",
    )
    .server(format!("http://localhost:{}/api", config.port));

    let ui = api_service.swagger_ui();

    let app = Route::new().nest("/api", api_service).nest("/swagger", ui);

    let bind_address = config.bind_address();
    tracing::info!(%bind_address, "starting server");
    tracing::info!("Swagger UI available at http://localhost:{}/swagger", config.port);

    Server::new(TcpListener::bind(bind_address)).run(app).await
}
