use std::net::SocketAddr;
use std::time::Duration;

/// Port the server binary and the client drivers agree on
pub const DEFAULT_PORT: u16 = 8081;

/// Configuration for the reactive server
///
/// All services (greeting, user, random-number stream and echo socket)
/// are served from one listener, so they share this configuration.
///
/// # Examples
///
/// ```
/// use reactsrv::common::ServerConfig;
/// use std::time::Duration;
///
/// let config = ServerConfig {
///     bind_addr: "127.0.0.1:8081".parse().unwrap(),
///     max_sessions: 100,
///     tick_interval: Duration::from_secs(1),
///     keep_alive_interval: Duration::from_secs(15),
/// };
/// ```
///
/// Using the default configuration:
///
/// ```
/// use reactsrv::common::ServerConfig;
/// use std::time::Duration;
///
/// let config = ServerConfig::default();
/// assert_eq!(config.tick_interval, Duration::from_secs(1));
/// ```
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Maximum number of concurrently open event streams and echo sockets
    pub max_sessions: usize,
    /// Period between two random-number events
    pub tick_interval: Duration,
    /// Period between two keep-alive comments on an idle event stream
    pub keep_alive_interval: Duration,
}

impl ServerConfig {
    /// Default configuration bound to the loopback address on `port`
    pub fn on_port(port: u16) -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], port)),
            ..Default::default()
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 0)), // Use port 0 for testing
            max_sessions: 100,
            tick_interval: Duration::from_secs(1),
            keep_alive_interval: Duration::from_secs(15),
        }
    }
}
