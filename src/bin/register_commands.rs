use tracing::error;

use kvbot::{config::RegistrarConfig, logging::initialize_logging, registrar::Registrar};

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    initialize_logging();

    // Every setting is checked before any network call
    let config = match RegistrarConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = Registrar::new(config).run().await {
        error!("{}", e);
        std::process::exit(1);
    }
}
