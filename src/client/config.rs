use crate::common::DEFAULT_PORT;
use std::time::Duration;

/// Configuration shared by the client drivers
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base HTTP URL of the server, without a trailing slash
    pub base_url: String,
    /// Connection timeout for HTTP requests
    pub connect_timeout: Duration,
    /// Overall request timeout; `None` waits indefinitely
    pub request_timeout: Option<Duration>,
    /// Bound on a full echo exchange (connect, send, reply, close)
    pub echo_timeout: Duration,
    /// Number of payloads per batch on the event stream
    pub batch_size: usize,
}

impl ClientConfig {
    /// Absolute HTTP URL for `path`
    pub fn http_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Absolute WebSocket URL for `path`, derived from the base URL scheme
    pub fn ws_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let base = if let Some(rest) = base.strip_prefix("https://") {
            format!("wss://{rest}")
        } else if let Some(rest) = base.strip_prefix("http://") {
            format!("ws://{rest}")
        } else {
            base.to_string()
        };
        format!("{base}{path}")
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: format!("http://localhost:{DEFAULT_PORT}"),
            connect_timeout: Duration::from_secs(10),
            request_timeout: None,
            echo_timeout: Duration::from_millis(5000),
            batch_size: 10,
        }
    }
}

/// Builder for client configuration
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: ClientConfig::default(),
        }
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.config.request_timeout = Some(timeout);
        self
    }

    pub fn echo_timeout(mut self, timeout: Duration) -> Self {
        self.config.echo_timeout = timeout;
        self
    }

    pub fn batch_size(mut self, size: usize) -> Self {
        self.config.batch_size = size;
        self
    }

    pub fn build(self) -> ClientConfig {
        self.config
    }
}

impl Default for ClientConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_target_local_server() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8081");
        assert_eq!(config.echo_timeout, Duration::from_millis(5000));
        assert_eq!(config.batch_size, 10);
        assert!(config.request_timeout.is_none());
    }

    #[test]
    fn test_client_config_builder() {
        let config = ClientConfigBuilder::new()
            .base_url("http://127.0.0.1:9000/")
            .connect_timeout(Duration::from_secs(1))
            .request_timeout(Duration::from_secs(60))
            .echo_timeout(Duration::from_millis(250))
            .batch_size(3)
            .build();

        assert_eq!(config.connect_timeout, Duration::from_secs(1));
        assert_eq!(config.request_timeout, Some(Duration::from_secs(60)));
        assert_eq!(config.echo_timeout, Duration::from_millis(250));
        assert_eq!(config.batch_size, 3);
        assert_eq!(config.http_url("/user"), "http://127.0.0.1:9000/user");
    }

    #[test]
    fn test_ws_url_follows_scheme() {
        let plain = ClientConfigBuilder::new().base_url("http://localhost:8081").build();
        assert_eq!(plain.ws_url("/echo"), "ws://localhost:8081/echo");

        let tls = ClientConfigBuilder::new().base_url("https://example.org").build();
        assert_eq!(tls.ws_url("/echo"), "wss://example.org/echo");
    }
}
