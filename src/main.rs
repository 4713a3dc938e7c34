use tracing::{error, info, warn};

use kvbot::{
    config::HandlerConfig, logging::initialize_logging, models::Data, server::start_server,
    store::connect_store,
};

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    initialize_logging();

    let config = match HandlerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    if config.public_key.is_none() {
        warn!("DISCORD_PUBLIC_KEY not set, every interaction will be rejected");
    }

    let store = match connect_store(&config.backend).await {
        Ok(store) => store,
        Err(e) => {
            error!("Failed to connect to key-value store: {}", e);
            std::process::exit(1);
        }
    };

    let data = Data::new(store, config.public_key);

    info!("Starting interaction server...");
    if let Err(e) = start_server(config.bind_address, data).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}
