use dotenvy::dotenv;
use reservation_buddy::{
    api::{self, AppState},
    cache::ReservationCache,
    config,
    db::JsonStore,
    errors::Result,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; variables can also be set externally
    if dotenv().is_ok() {
        info!("Loaded environment from .env");
    }

    // 3. Load the application configuration
    let app_config = config::load_app_configuration()
        .inspect_err(|e| error!("Failed to load configuration: {}", e))?;

    // 4. Build the dataset store and the summary cache
    let store = JsonStore::new(app_config.data.directory.clone());
    let cache = ReservationCache::new(app_config.cache.ttl());
    let state = AppState::new(store, cache);

    // 5. Serve until shutdown
    api::run_server(&app_config.server, state)
        .await
        .inspect_err(|e| error!("Server error: {}", e))
}
