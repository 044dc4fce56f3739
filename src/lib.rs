use thiserror::Error;

/// Error types for the reactsrv library
#[derive(Error, Debug)]
pub enum ReactError {
    /// Socket-level errors (bind, accept, serve)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP client errors (connect, request, status, body decoding)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// WebSocket client errors (handshake, send, receive)
    #[error("WebSocket error: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),

    /// Server-Sent Events client errors
    #[error("Event stream error: {0}")]
    EventSource(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Timeout errors
    #[error("Timeout error: {0}")]
    Timeout(String),

    /// The peer went away before the expected message arrived
    #[error("Connection closed: {0}")]
    Closed(String),

    /// Every long-lived session slot is taken
    #[error("Session limit reached: {max} sessions")]
    SessionLimit { max: usize },
}

/// Result type for the reactsrv library
pub type Result<T> = std::result::Result<T, ReactError>;

pub mod client;
pub mod common;
pub mod model;
pub mod pipeline;
pub mod rest;
pub mod security;
pub mod server;
pub mod sse;
pub mod ws;

// Re-export main types for convenience
pub use client::{ClientConfig, ClientConfigBuilder, RestClient, SseClient, WsEchoClient};
pub use common::{ReactiveServer, ServerConfig};
pub use model::User;
pub use server::Server;
