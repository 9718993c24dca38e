use dotenvy::dotenv;

mod config;
mod setup;

use config::app_config::AppConfig;
use setup::{dependency_injection::DependencyContainer, session::Session};

/// Console Entry Point
///
/// Initializes the application, wires dependencies, and runs a scripted
/// catalog session against the in-memory engine.
///
/// Architecture mirrors the hexagonal layering of the workspace:
/// - config/: Application configuration (page size, initial tab)
/// - setup/: Dependency injection and the session driver
fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env();

    // 4. Wire dependencies
    let container = DependencyContainer::new();

    // 5. Run the session
    Session::run(config, container)?;

    Ok(())
}
