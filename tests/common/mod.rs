//! Shared utilities for integration testing.

use std::time::Duration;

use sub_service::config::AppConfig;
use sub_service::http::HttpServer;
use sub_service::lifecycle::Shutdown;

/// Start the service on the given localhost port and return the shutdown
/// handle. Waits briefly so the listener is accepting before tests hit it.
pub async fn spawn_service(port: u16) -> Shutdown {
    let mut config = AppConfig::default();
    config.listener.bind_address = format!("127.0.0.1:{}", port);

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();

    let listener = tokio::net::TcpListener::bind(&config.listener.bind_address)
        .await
        .unwrap();
    let server = HttpServer::new(&config);
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    tokio::time::sleep(Duration::from_millis(100)).await;
    shutdown
}

/// Non-pooled client so sockets close promptly between tests.
#[allow(dead_code)]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
