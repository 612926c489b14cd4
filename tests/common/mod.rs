//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::time::Duration;

use forwarded_origin::config::EchoConfig;
use forwarded_origin::http::EchoServer;
use forwarded_origin::lifecycle::Shutdown;
use tokio::net::TcpListener;

/// Start the echo service on `addr`. Trigger the returned handle to stop it.
pub async fn start_echo_server(addr: SocketAddr) -> Shutdown {
    let mut config = EchoConfig::default();
    config.listener.bind_address = addr.to_string();

    let shutdown = Shutdown::new();
    let listener = TcpListener::bind(addr).await.unwrap();
    let server = EchoServer::new(config);
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    tokio::time::sleep(Duration::from_millis(100)).await;
    shutdown
}

/// Client without connection pooling or system proxy settings.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
