//! Request/response endpoints
//!
//! `GET /hello_world` answers with a constant text body and
//! `POST /user` accepts a JSON user and returns it with an identifier.

pub mod greeting;
pub mod user;

pub use greeting::{GREETING, hello_world};
pub use user::create_user;
