// Database entities - SeaORM models
pub mod event;
pub mod event_interest;
pub mod registration;
pub mod user;
