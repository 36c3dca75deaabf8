use sea_orm::{Database, DatabaseConnection, DbErr};
use std::env;

/// Opens the database named by `DATABASE_URL`.
pub async fn connect() -> Result<DatabaseConnection, DbErr> {
    // Default to a local SQLite file for development
    let db_url = env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite:./scholarships.sqlite?mode=rwc".to_string());

    let backend = if db_url.starts_with("postgres") {
        "PostgreSQL"
    } else {
        "SQLite"
    };
    tracing::info!("Connecting to {} database", backend);

    Database::connect(&db_url).await
}
