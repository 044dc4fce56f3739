use crate::common::{ReactiveServer, ServerConfig};
use crate::server::Server;
use crate::{ReactError, Result};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Spawns a server on an ephemeral loopback port for integration tests
///
/// The `bind_addr` of `config` is ignored. The listener is bound before the
/// server task starts, so clients may connect as soon as this returns.
pub async fn spawn_test_server(
    config: ServerConfig,
) -> Result<(JoinHandle<Result<()>>, SocketAddr)> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .map_err(|e| ReactError::Config(format!("Failed to bind listener: {e}")))?;
    let addr = listener
        .local_addr()
        .map_err(|e| ReactError::Config(format!("Failed to get local address: {e}")))?;

    let server = Server::new(ServerConfig {
        bind_addr: addr,
        ..config
    });

    let server_handle = tokio::spawn(async move { server.serve(listener).await });

    Ok((server_handle, addr))
}

/// Base URL of a server spawned by [`spawn_test_server`]
pub fn base_url(addr: SocketAddr) -> String {
    format!("http://{addr}")
}
