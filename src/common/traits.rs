use crate::Result;
use async_trait::async_trait;
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// Common trait for reactive servers
///
/// Separates binding from serving so callers (and tests) can bind an
/// ephemeral port first and learn the address before the server runs.
#[async_trait]
pub trait ReactiveServer {
    /// Binds the configured address and serves until shutdown
    async fn run(&self) -> Result<()>;

    /// Serves on an already bound listener until shutdown
    async fn serve(&self, listener: TcpListener) -> Result<()>;

    /// Returns a shutdown signal sender that can be used to gracefully shutdown the server
    fn shutdown_signal(&self) -> tokio::sync::broadcast::Sender<()>;

    /// Address the server is configured to bind to
    fn bind_addr(&self) -> SocketAddr;
}
