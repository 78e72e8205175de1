use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use std::time::Duration;
use tracing::info;

use super::migrations::Migrator;

pub const DEFAULT_DATABASE_PATH: &str = "reports.db";

pub async fn establish_connection(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(database_url.to_owned());

    // Every pooled connection to `sqlite::memory:` opens its own empty database,
    // so in-memory stores are pinned to a single connection.
    if database_url.contains(":memory:") {
        opt.max_connections(1).min_connections(1);
    } else {
        opt.max_connections(10).min_connections(1);
    }

    opt.connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .sqlx_logging(true)
        .sqlx_logging_level(tracing::log::LevelFilter::Debug);

    Database::connect(opt).await
}

pub fn get_database_url(database_path: Option<&str>) -> String {
    match database_path {
        Some(path) if path == ":memory:" => "sqlite::memory:".to_string(),
        Some(path) => format!("sqlite://{}?mode=rwc", path),
        None => format!("sqlite://{}?mode=rwc", DEFAULT_DATABASE_PATH),
    }
}

/// Brings the schema up to date. Must run before any store touches the tables.
pub async fn setup_database(db: &DatabaseConnection) -> Result<(), DbErr> {
    Migrator::up(db, None).await?;
    info!("Database migrations completed");
    Ok(())
}

/// Opens the database at `database_path` and applies pending migrations.
pub async fn open_database(database_path: &str) -> Result<DatabaseConnection, DbErr> {
    let database_url = get_database_url(Some(database_path));
    let db = establish_connection(&database_url).await?;
    setup_database(&db).await?;
    Ok(db)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_path_maps_to_sqlite_memory_url() {
        assert_eq!(get_database_url(Some(":memory:")), "sqlite::memory:");
    }

    #[test]
    fn file_path_is_opened_read_write_create() {
        assert_eq!(
            get_database_url(Some("/tmp/reports.db")),
            "sqlite:///tmp/reports.db?mode=rwc"
        );
        assert_eq!(get_database_url(None), "sqlite://reports.db?mode=rwc");
    }
}
