use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::{app_config::AppConfig, database_config};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// REST API Entry Point
///
/// Initializes the application, wires dependencies, and starts the HTTP server.
///
/// - config/: Application configuration (server, CORS, database, error scheme, admin key)
/// - setup/: Dependency injection and server setup
/// - api/: Route handlers, DTOs and error rendering
fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env()?;

    // 4. One runtime, SERVER_WORKERS threads serving the shared pool
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.server.workers)
        .enable_all()
        .build()?;

    runtime.block_on(async move {
        // 5. Initialize database
        let pool = database_config::init_database(&config.database).await?;

        // 6. Wire dependencies
        let container = DependencyContainer::new(pool, &config.errors);

        // 7. Run server
        Server::run(config, container).await
    })
}
