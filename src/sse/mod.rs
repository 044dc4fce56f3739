//! Server-Sent Events publisher
//!
//! `GET /sse/random_numbers` pushes one `random` event per tick, ids
//! counting up from zero, until the consumer disconnects.

pub mod handler;
pub mod publisher;

pub use handler::random_numbers;
pub use publisher::{RANDOM_EVENT_TYPE, RandomEvent, random_events};
