use super::ClientConfig;
use crate::server::routes::ECHO_PATH;
use crate::{ReactError, Result};
use futures::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio::time::timeout;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};
use tracing::debug;

/// WebSocket client for the echo service
///
/// # Examples
///
/// ```no_run
/// use reactsrv::client::{ClientConfig, WsEchoClient};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let reply = WsEchoClient::echo_once(&ClientConfig::default(), "Hello").await?;
///     assert_eq!(reply, "ECHO -> Hello");
///     Ok(())
/// }
/// ```
pub struct WsEchoClient {
    socket: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

impl WsEchoClient {
    /// Opens a socket to the echo endpoint of the configured server
    pub async fn connect(config: &ClientConfig) -> Result<Self> {
        let url = config.ws_url(ECHO_PATH);
        let (socket, _) = connect_async(url.as_str()).await?;
        debug!(%url, "Connected to echo service");
        Ok(Self { socket })
    }

    /// Sends one text frame and waits for the next text frame in reply
    pub async fn echo(&mut self, text: &str) -> Result<String> {
        self.socket.send(Message::Text(text.into())).await?;

        while let Some(frame) = self.socket.next().await {
            match frame? {
                Message::Text(reply) => return Ok(reply.to_string()),
                Message::Close(_) => break,
                _ => continue,
            }
        }

        Err(ReactError::Closed(
            "Echo session closed before a reply arrived".to_string(),
        ))
    }

    /// Closes the socket with a normal close frame
    pub async fn close(mut self) -> Result<()> {
        self.socket.close(None).await?;
        Ok(())
    }

    /// Connects, echoes `text` once, closes; all within `config.echo_timeout`
    pub async fn echo_once(config: &ClientConfig, text: &str) -> Result<String> {
        let exchange = async {
            let mut client = Self::connect(config).await?;
            let reply = client.echo(text).await?;
            client.close().await?;
            Ok::<_, ReactError>(reply)
        };

        timeout(config.echo_timeout, exchange).await.map_err(|_| {
            ReactError::Timeout(format!(
                "No echo reply within {} ms",
                config.echo_timeout.as_millis()
            ))
        })?
    }
}
