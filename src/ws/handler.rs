use crate::security::SessionGuard;
use crate::server::AppState;
use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::{IntoResponse, Response};
use tokio::sync::broadcast;
use tracing::{Instrument, debug, info, warn};
use uuid::Uuid;

/// Prefix put in front of every echoed text frame
pub const ECHO_PREFIX: &str = "ECHO -> ";

/// Reply for one inbound text payload
pub fn echo_reply(text: &str) -> String {
    format!("{ECHO_PREFIX}{text}")
}

/// `GET /echo`: upgrades to a WebSocket that echoes text frames
pub async fn echo(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    let guard = match state.sessions.try_acquire("echo") {
        Ok(guard) => guard,
        Err(e) => {
            warn!(error = %e, "Echo session rejected");
            return e.into_response();
        }
    };

    let shutdown = state.shutdown_listener();
    ws.on_upgrade(move |socket| {
        let session = Uuid::new_v4();
        let span = tracing::info_span!("echo", %session);
        handle_socket(socket, shutdown, guard).instrument(span)
    })
}

/// Replies to each text frame in arrival order, one reply per frame
///
/// Ends quietly when the peer closes, the socket fails, or the server
/// shuts down.
async fn handle_socket(
    mut socket: WebSocket,
    mut shutdown: broadcast::Receiver<()>,
    _guard: SessionGuard,
) {
    info!("Echo session opened");
    let mut replies: u64 = 0;

    loop {
        let frame = tokio::select! {
            frame = socket.recv() => frame,
            _ = shutdown.recv() => {
                info!("Server shutting down, closing echo session");
                break;
            }
        };

        match frame {
            Some(Ok(Message::Text(text))) => {
                let reply = echo_reply(text.as_str());
                debug!(size = text.as_str().len(), "Echoing text frame");
                if let Err(e) = socket.send(Message::Text(reply.into())).await {
                    debug!(error = %e, "Peer went away before the reply was sent");
                    break;
                }
                replies += 1;
            }
            Some(Ok(Message::Binary(data))) => {
                debug!(size = data.len(), "Ignoring binary frame");
            }
            Some(Ok(Message::Close(_))) | None => {
                info!("Client closed echo session");
                break;
            }
            // Ping and pong are answered by the framework
            Some(Ok(_)) => {}
            Some(Err(e)) => {
                debug!(error = %e, "Echo session ended with a socket error");
                break;
            }
        }
    }

    info!(replies, "Echo session finished");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_echo_reply_prefixes_payload() {
        assert_eq!(echo_reply("Hello"), "ECHO -> Hello");
    }

    #[test]
    fn test_echo_reply_empty_payload() {
        assert_eq!(echo_reply(""), ECHO_PREFIX);
    }

    #[test]
    fn test_echo_reply_keeps_unicode() {
        assert_eq!(echo_reply("héllo 🌍"), "ECHO -> héllo 🌍");
    }
}
