use lb_link::LinkClient;
use lb_server::{AppState, error::ServerError, logger, routes::build_app};
use lb_store::AccountStore;

use std::error::Error;
use std::sync::Arc;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    if let Err(e) = dotenvy::dotenv()
        && !e.not_found()
    {
        eprintln!("Failed to load .env file: {e}");
    }

    // Load and validate configuration
    let config = lb_config::Config::load().map_err(ServerError::from)?;
    config.validate().map_err(ServerError::from)?;

    // Initialize logger (before any other logging)
    let log_file_path = config.log_file_path().map_err(ServerError::from)?;
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting lb-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Load the account store; a corrupt document aborts startup
    let storage_path = config.storage_path();
    info!("Opening account store: {}", storage_path.display());
    let store = AccountStore::initialize(storage_path)
        .await
        .map_err(ServerError::from)?;
    let store = Arc::new(store);

    let link_client = LinkClient::new(
        &config.external_api.base_url,
        config.external_api.api_key.as_deref(),
        config.external_api.timeout(),
    )
    .map_err(ServerError::from)?;
    if !link_client.has_api_key() {
        warn!("Account-linking API key missing; connect requests will fail");
    }

    let app_state = AppState::new(store, link_client);
    let app = build_app(app_state, &config.server.static_dir);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: bind_addr.clone(),
            source,
        })?;

    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
                Err(e) => {
                    error!("Failed to listen for SIGINT: {}", e);
                    std::future::pending::<()>().await;
                }
            }
        })
        .await
        .map_err(ServerError::Serve)?;

    info!("Graceful shutdown complete");

    Ok(())
}
