//! HTTP server hosting the greeting, user, event stream and echo services
//!
//! Wiring is explicit: [`Server::new`] builds the shared [`AppState`] and
//! [`routes::router`] maps every path to its handler.

pub mod error;
pub mod routes;
pub mod state;


pub use routes::router;
pub use state::AppState;

use crate::Result;
use crate::common::{ReactiveServer, ServerConfig};
use async_trait::async_trait;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

/// Server exposing all reactive services on one listener
///
/// # Examples
///
/// ```no_run
/// use reactsrv::common::{ReactiveServer, ServerConfig};
/// use reactsrv::server::Server;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let server = Server::new(ServerConfig::on_port(8081));
///     server.run().await?;
///     Ok(())
/// }
/// ```
pub struct Server {
    config: ServerConfig,
    shutdown_signal: Arc<tokio::sync::broadcast::Sender<()>>,
}

impl Server {
    /// Creates a new server with the given configuration
    pub fn new(config: ServerConfig) -> Self {
        let (shutdown_signal, _) = tokio::sync::broadcast::channel(1);
        Self {
            config,
            shutdown_signal: Arc::new(shutdown_signal),
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

#[async_trait]
impl ReactiveServer for Server {
    async fn run(&self) -> Result<()> {
        let listener = TcpListener::bind(self.config.bind_addr).await?;
        self.serve(listener).await
    }

    async fn serve(&self, listener: TcpListener) -> Result<()> {
        let address = listener.local_addr()?;
        let state = AppState::new(self.config.clone(), self.shutdown_signal());
        let app = router(state);

        info!(%address, max_sessions = self.config.max_sessions, "Reactive server listening");

        let notify = self.shutdown_signal();
        let mut shutdown_rx = self.shutdown_signal.subscribe();
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                tokio::select! {
                    _ = signal::ctrl_c() => {
                        info!("Received shutdown signal, stopping server");
                        // Wake the open sessions so they let go of their connections
                        let _ = notify.send(());
                    }
                    _ = shutdown_rx.recv() => {
                        info!("Received internal shutdown signal, stopping server");
                    }
                }
            })
            .await?;

        info!("Reactive server stopped");
        Ok(())
    }

    fn shutdown_signal(&self) -> tokio::sync::broadcast::Sender<()> {
        self.shutdown_signal.as_ref().clone()
    }

    fn bind_addr(&self) -> SocketAddr {
        self.config.bind_addr
    }
}
