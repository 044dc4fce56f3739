//! Client drivers for the three services
//!
//! - [`RestClient`]: one request, one response
//! - [`SseClient`]: consumes the random-number stream in batches
//! - [`WsEchoClient`]: duplex echo exchange with a bounded wait

pub mod config;
pub mod rest;
pub mod sse;
pub mod ws;

pub use config::{ClientConfig, ClientConfigBuilder};
pub use rest::RestClient;
pub use sse::SseClient;
pub use ws::WsEchoClient;
