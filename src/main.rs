use migration::{Migrator, MigratorTrait};
use scholartrack::storage::ScholarshipStore;
use scholartrack::{create_app, db, seed};
use std::env;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load environment variables from .env if present
    let _ = dotenvy::dotenv();

    let db = db::connect().await.expect("Failed to connect to database");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    let store = ScholarshipStore::new(db);

    // Seeding finishes before the listener opens. A failure is logged and
    // the server starts with whatever the store holds.
    if let Err(err) = seed::run(&store).await {
        tracing::error!("seeding failed: {err}");
    }

    let app = create_app(store);

    let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("127.0.0.1:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind address");
    tracing::info!("Server running on http://{}", addr);
    axum::serve(listener, app).await.expect("Server error");
}
