//! Data records exchanged by the services

pub mod user;

pub use user::User;
