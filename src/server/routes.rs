use super::AppState;
use crate::{rest, sse, ws};
use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

pub const HELLO_WORLD_PATH: &str = "/hello_world";
pub const USER_PATH: &str = "/user";
pub const RANDOM_NUMBERS_PATH: &str = "/sse/random_numbers";
pub const ECHO_PATH: &str = "/echo";

/// Route table for every service the server exposes
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(HELLO_WORLD_PATH, get(rest::greeting::hello_world))
        .route(USER_PATH, post(rest::user::create_user))
        .route(RANDOM_NUMBERS_PATH, get(sse::handler::random_numbers))
        .route(ECHO_PATH, get(ws::handler::echo))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
