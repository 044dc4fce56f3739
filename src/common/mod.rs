//! Common traits and types used across the reactsrv library
//!
//! This module contains the server configuration, the trait that
//! defines the server interface, and helpers for integration tests.

pub mod config;
pub mod test_utils;
pub mod traits;

pub use config::{DEFAULT_PORT, ServerConfig};
pub use test_utils::{base_url, spawn_test_server};
pub use traits::ReactiveServer;
