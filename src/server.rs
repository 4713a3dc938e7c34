//! HTTP server for interaction callbacks.

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use crate::{handlers::handle_interaction, models::Data};

/// Every path and method lands on the interaction handler
pub fn build_router(data: Data) -> Router {
    Router::new().fallback(handle_interaction).with_state(data)
}

/// Serve interactions until Ctrl+C
pub async fn start_server(addr: SocketAddr, data: Data) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!("Interaction server listening on {}", listener.local_addr()?);

    axum::serve(listener, build_router(data))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        signature::tests::{public_key_hex, sign_hex, signing_key},
        store::MemoryStore,
    };
    use std::sync::Arc;

    #[tokio::test]
    async fn test_router_serves_any_path() {
        let data = Data::new(
            Arc::new(MemoryStore::new()),
            Some(public_key_hex(&signing_key())),
        );
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, build_router(data)).await.unwrap();
        });

        let client = reqwest::Client::new();
        let body = r#"{"type":1}"#;
        let response = client
            .post(format!("http://{}/interactions", addr))
            .header("x-signature-ed25519", sign_hex(&signing_key(), "42", body.as_bytes()))
            .header("x-signature-timestamp", "42")
            .body(body)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 200);
        assert_eq!(response.text().await.unwrap(), r#"{"type":1}"#);

        let response = client
            .get(format!("http://{}/", addr))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 405);
    }
}
