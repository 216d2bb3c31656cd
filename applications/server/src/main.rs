/// Songbook Server - songs CRUD service with lyric enrichment
use clap::{Parser, Subcommand};
use songbook_lookup::LookupClient;
use songbook_server::{api, config::ServerConfig, shutdown::shutdown_signal, state::AppState};
use songbook_storage::SqliteSongStore;
use sqlx::SqlitePool;
use std::{
    net::SocketAddr,
    path::{Path, PathBuf},
    sync::Arc,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "songbook-server")]
#[command(about = "Songbook HTTP service", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long, env = "SONGBOOK_CONFIG")]
        config: Option<PathBuf>,
    },
    /// Apply database migrations and exit
    Migrate {
        /// Configuration file path
        #[arg(short, long, env = "SONGBOOK_CONFIG")]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Missing .env is fine; real environment wins over it
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "songbook_server=info,songbook_storage=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => {
            serve(config.as_deref()).await?;
        }
        Commands::Migrate { config } => {
            migrate(config.as_deref()).await?;
        }
    }

    Ok(())
}

async fn serve(config_path: Option<&Path>) -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::load(config_path)?;
    config.validate()?;

    tracing::info!("Starting Songbook Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    // Initialize database
    let pool = connect(&config).await?;
    songbook_storage::run_migrations(&pool).await?;
    let db = Arc::new(SqliteSongStore::new(pool.clone()));
    tracing::info!("Database connected");

    // Initialize lookup client
    let lookup = Arc::new(LookupClient::new(config.to_lookup_config())?);
    tracing::info!("Lookup client targeting {}", lookup.base_url());

    // Build application state and router
    let app_state = AppState::new(db, lookup);
    let app = api::router(app_state);

    // Create server address
    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("Songbook Server stopped");

    Ok(())
}

async fn migrate(config_path: Option<&Path>) -> anyhow::Result<()> {
    let config = ServerConfig::load(config_path)?;

    let pool = connect(&config).await?;
    songbook_storage::run_migrations(&pool).await?;
    pool.close().await;

    tracing::info!("Migrations applied");
    Ok(())
}

async fn connect(config: &ServerConfig) -> anyhow::Result<SqlitePool> {
    let database_url = &config.storage.database_url;

    if let Some(parent) = sqlite_file_parent(database_url) {
        tokio::fs::create_dir_all(&parent).await?;
    }

    let pool =
        songbook_storage::create_pool(database_url, config.storage.max_connections).await?;
    Ok(pool)
}

/// Directory holding the database file, for file-backed SQLite URLs
fn sqlite_file_parent(database_url: &str) -> Option<PathBuf> {
    let path = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))?;
    let path = path.split('?').next().unwrap_or_default();

    if path.is_empty() || path == ":memory:" {
        return None;
    }

    Path::new(path)
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map(Path::to_path_buf)
}
