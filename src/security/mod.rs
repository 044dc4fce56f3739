//! Resource management for long-lived sessions

pub mod limits;

pub use limits::{SessionGuard, SessionMetrics, SessionTracker};
