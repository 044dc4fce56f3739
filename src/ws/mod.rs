//! WebSocket echo service
//!
//! Every inbound text frame on `/echo` yields exactly one outbound text
//! frame carrying [`ECHO_PREFIX`] followed by the original payload.

pub mod handler;

pub use handler::{ECHO_PREFIX, echo, echo_reply};
