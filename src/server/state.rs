use crate::common::ServerConfig;
use crate::security::SessionTracker;
use std::sync::Arc;
use tokio::sync::broadcast;

/// State shared by every handler
///
/// Nothing in here is mutated per request except the session counters.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub sessions: Arc<SessionTracker>,
    shutdown: broadcast::Sender<()>,
}

impl AppState {
    pub fn new(config: ServerConfig, shutdown: broadcast::Sender<()>) -> Self {
        let sessions = Arc::new(SessionTracker::new(config.max_sessions));
        Self {
            config: Arc::new(config),
            sessions,
            shutdown,
        }
    }

    /// Receiver that fires when the server begins shutting down
    ///
    /// Long-lived sessions select on it so graceful shutdown is not held
    /// open by an endless event stream or an idle socket.
    pub fn shutdown_listener(&self) -> broadcast::Receiver<()> {
        self.shutdown.subscribe()
    }
}
