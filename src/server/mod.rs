pub mod app;
pub mod error;
pub mod handlers;
pub mod openapi;

use clap::Subcommand;

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrateDirection {
    Up,
    Down,
    Fresh,
}

use crate::database::{connection::*, migrations::Migrator};
use crate::services::SampleDataService;
use anyhow::Result;
use sea_orm_migration::MigratorTrait;
use tracing::info;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

/// Options for `serve`.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_path: String,
    /// Single allowed origin; `*` allows any.
    pub cors_origin: Option<String>,
    /// Run the idempotent sample-data seed before accepting requests.
    pub seed_on_start: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            database_path: DEFAULT_DATABASE_PATH.to_string(),
            cors_origin: Some(DEFAULT_CORS_ORIGIN.to_string()),
            seed_on_start: false,
        }
    }
}

pub async fn start_server(config: &ServerConfig) -> Result<()> {
    let db = open_database(&config.database_path).await?;

    if config.seed_on_start {
        let outcome = SampleDataService::new(db.clone()).seed().await?;
        info!("{}", outcome.message());
    }

    let app = app::create_app(db.clone(), config.cors_origin.as_deref()).await?;

    log_routes();

    let address = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!("Server running on http://{}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await?;
    info!("Database connection closed");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", err);
        return;
    }
    info!("Shutdown signal received");
}

fn log_routes() {
    info!("API Endpoints:");
    info!("  /health                     - Health check");
    info!("  /api-docs/openapi.json      - OpenAPI document");
    info!("  /reports[/{{id}}]             - Report CRUD");
    info!("  /sample-data[/{{data_type}}]  - Sample data listing");
    info!("  /initialize-sample-data     - Idempotent sample data seed (POST)");
}

pub async fn migrate_database(database_path: &str, direction: MigrateDirection) -> Result<()> {
    let database_url = get_database_url(Some(database_path));
    let db = establish_connection(&database_url).await?;

    match direction {
        MigrateDirection::Up => {
            info!("Running migrations up");
            Migrator::up(&db, None).await?;
        }
        MigrateDirection::Down => {
            info!("Running migrations down");
            Migrator::down(&db, None).await?;
        }
        MigrateDirection::Fresh => {
            info!("Running fresh migrations (down then up)");
            Migrator::down(&db, None).await?;
            Migrator::up(&db, None).await?;
        }
    }

    info!("Database migration completed");
    db.close().await?;
    Ok(())
}

pub async fn seed_database(database_path: &str) -> Result<()> {
    let db = open_database(database_path).await?;
    let outcome = SampleDataService::new(db.clone()).seed().await?;
    info!("{}", outcome.message());
    db.close().await?;
    Ok(())
}
