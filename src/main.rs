use anyhow::Result;
use clap::{Parser, Subcommand};
use report_builder::database::connection::DEFAULT_DATABASE_PATH;
use report_builder::server::{self, ServerConfig, DEFAULT_CORS_ORIGIN, DEFAULT_PORT};
use tracing::info;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[clap(author, version, about)]
struct Cli {
    #[clap(short, long, global = true)]
    log_level: Option<String>,
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the REST API
    Serve {
        #[clap(short, long, default_value_t = DEFAULT_PORT)]
        port: u16,
        #[clap(long, default_value = "0.0.0.0")]
        host: String,
        #[clap(short, long, default_value = DEFAULT_DATABASE_PATH)]
        database: String,
        /// Allowed CORS origin, or `*` for any
        #[clap(long, default_value = DEFAULT_CORS_ORIGIN)]
        cors_origin: String,
        /// Seed sample data before serving
        #[clap(long)]
        seed: bool,
    },
    Db {
        #[clap(subcommand)]
        command: DbCommands,
    },
    /// Insert the sample data catalog if the table is empty
    Seed {
        #[clap(short, long, default_value = DEFAULT_DATABASE_PATH)]
        database: String,
    },
}

#[derive(Subcommand, Debug)]
enum DbCommands {
    Init {
        #[clap(short, long, default_value = DEFAULT_DATABASE_PATH)]
        database: String,
    },
    Migrate {
        #[clap(subcommand)]
        direction: server::MigrateDirection,
        #[clap(short, long, default_value = DEFAULT_DATABASE_PATH)]
        database: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    setup_logging(&args.log_level);

    match args.command {
        Commands::Serve {
            port,
            host,
            database,
            cors_origin,
            seed,
        } => {
            info!("Starting server on port {}", port);
            let config = ServerConfig {
                host,
                port,
                database_path: database,
                cors_origin: Some(cors_origin),
                seed_on_start: seed,
            };
            server::start_server(&config).await?;
        }
        Commands::Db { command } => match command {
            DbCommands::Init { database } => {
                info!("Initializing database: {}", database);
                server::migrate_database(&database, server::MigrateDirection::Up).await?;
            }
            DbCommands::Migrate {
                direction,
                database,
            } => {
                info!("Running database migration: {:?}", direction);
                server::migrate_database(&database, direction).await?;
            }
        },
        Commands::Seed { database } => {
            info!("Seeding sample data into {}", database);
            server::seed_database(&database).await?;
        }
    }

    Ok(())
}

fn setup_logging(log_level: &Option<String>) {
    let log_level = match log_level
        .as_ref()
        .unwrap_or(&"info".to_string())
        .to_lowercase()
        .as_str()
    {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!("sqlx=warn,{}", log_level)))
        .init();
}
