//! Shared utilities for integration testing.

use std::net::SocketAddr;
use tokio::net::TcpListener;

use upload_api::config::Config;
use upload_api::http::HttpServer;

/// Start the service on an ephemeral local port and return its address.
pub async fn spawn_server() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let config = Config {
        env: "test".to_string(),
        http_port: addr.port().to_string(),
    };
    let server = HttpServer::new(config);

    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    addr
}

/// A reqwest client suitable for hitting the local server.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
