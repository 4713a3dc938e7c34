//! Key-value backends behind a minimal `get`/`put` capability.

mod cloudflare;
mod memory;
mod postgres;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

pub use cloudflare::CloudflareKvStore;
pub use memory::MemoryStore;
pub use postgres::PostgresStore;

use crate::{config::StoreBackend, error::StoreError};

/// External key-value store used by the commands
///
/// Each call is a single request against the backend; no read-modify-write.
#[async_trait]
pub trait KvStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    async fn put(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Open the configured backend
pub async fn connect_store(backend: &StoreBackend) -> Result<Arc<dyn KvStore>, StoreError> {
    let store: Arc<dyn KvStore> = match backend {
        StoreBackend::Memory => {
            info!("Using in-memory key-value store (values are lost on restart)");
            Arc::new(MemoryStore::new())
        }
        StoreBackend::Postgres { database_url } => Arc::new(PostgresStore::new(database_url).await?),
        StoreBackend::Cloudflare(config) => {
            info!(
                "Using Workers KV namespace {} of account {}",
                config.namespace_id, config.account_id
            );
            Arc::new(CloudflareKvStore::new(config.clone()))
        }
    };
    Ok(store)
}
