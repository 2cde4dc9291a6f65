/// Melo Server - song catalog discovery API
use clap::{Parser, Subcommand};
use melo_server::{config::ServerConfig, create_router, seed, state::AppState};
use melo_storage::SqliteCatalog;
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "melo-server")]
#[command(about = "Melo song catalog server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long, env = "MELO_CONFIG")]
        config: Option<PathBuf>,
    },
    /// Load songs from a JSON file into the catalog
    Seed {
        /// JSON array of songs
        file: PathBuf,
        /// Configuration file path
        #[arg(short, long, env = "MELO_CONFIG")]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "melo_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => {
            serve(config).await?;
        }
        Commands::Seed { file, config } => {
            seed_catalog(&file, config).await?;
        }
    }

    Ok(())
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<ServerConfig> {
    let config = ServerConfig::load(path.as_deref())?;
    config.validate()?;
    Ok(config)
}

async fn open_catalog(config: &ServerConfig) -> anyhow::Result<SqliteCatalog> {
    let pool = melo_storage::create_pool(&config.storage.database_url).await?;
    melo_storage::run_migrations(&pool).await?;
    tracing::info!("Database connected");
    Ok(SqliteCatalog::new(pool))
}

async fn serve(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    tracing::info!("Starting Melo Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    let catalog = Arc::new(open_catalog(&config).await?);
    tracing::info!(
        sections = config.discovery.sections.len(),
        search_limit = ?config.discovery.search_limit,
        "Discovery configured"
    );

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    let app = create_router(AppState::from_catalog(catalog, config.discovery));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn seed_catalog(file: &std::path::Path, config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let catalog = open_catalog(&config).await?;

    let songs = seed::read_seed_file(file)?;
    tracing::info!("Seeding {} songs from {}", songs.len(), file.display());

    let report = seed::seed_catalog(&catalog, songs).await?;

    println!("Inserted: {}", report.inserted);
    println!("Skipped (duplicates): {}", report.skipped);

    Ok(())
}
