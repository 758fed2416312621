//! Test server lifecycle management
//!
//! Each test gets an isolated server with its own in-memory catalog.

use super::constants::*;
use super::fixtures::populate_test_catalog;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tunestore::catalog_store::InMemoryCatalogStore;
use tunestore::server::{make_app, GuardedCatalogStore, RequestsLoggingLevel, ServerConfig};

/// Test server instance with an isolated catalog
///
/// When dropped, the server gracefully shuts down.
pub struct TestServer {
    /// Base URL for making requests (e.g., "http://127.0.0.1:12345")
    pub base_url: String,

    /// The port the server is listening on
    pub port: u16,

    /// The served catalog, for direct inspection in tests
    pub catalog: GuardedCatalogStore,

    _shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestServer {
    /// Spawns a server on a random port, backed by the seeded test catalog
    ///
    /// # Panics
    ///
    /// Panics if seeding fails, the port cannot be bound or the server
    /// doesn't become ready within timeout.
    pub async fn spawn() -> Self {
        Self::spawn_with_config(ServerConfig {
            requests_logging_level: RequestsLoggingLevel::None,
            max_body_bytes: TEST_MAX_BODY_BYTES,
            ..Default::default()
        })
        .await
    }

    #[allow(dead_code)]
    pub async fn spawn_with_config(config: ServerConfig) -> Self {
        let catalog: GuardedCatalogStore = Arc::new(InMemoryCatalogStore::new());
        populate_test_catalog(catalog.as_ref()).expect("Failed to seed test catalog");

        // Bind to random port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");

        let port = listener
            .local_addr()
            .expect("Failed to get local address")
            .port();

        let base_url = format!("http://127.0.0.1:{}", port);

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        let app = make_app(
            ServerConfig {
                host: "127.0.0.1".to_string(),
                port,
                ..config
            },
            catalog.clone(),
        );

        // Spawn server in background task with graceful shutdown
        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .expect("Server failed");
        });

        let server = Self {
            base_url,
            port,
            catalog,
            _shutdown_tx: Some(shutdown_tx),
        };

        server.wait_for_ready().await;

        server
    }

    /// Waits for the server to become ready by polling the / endpoint
    async fn wait_for_ready(&self) {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(100))
            .build()
            .expect("Failed to build reqwest client");

        let start = std::time::Instant::now();
        let timeout = Duration::from_millis(SERVER_READY_TIMEOUT_MS);

        loop {
            if start.elapsed() > timeout {
                panic!(
                    "Server did not become ready within {}ms",
                    SERVER_READY_TIMEOUT_MS
                );
            }

            match client.get(format!("{}/", self.base_url)).send().await {
                Ok(response) if response.status().is_success() => return,
                _ => {
                    tokio::time::sleep(Duration::from_millis(SERVER_READY_POLL_INTERVAL_MS)).await;
                }
            }
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self._shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
