use super::publisher::random_events;
use crate::server::AppState;
use async_stream::stream;
use axum::extract::State;
use axum::response::sse::{KeepAlive, Sse};
use axum::response::{IntoResponse, Response};
use futures::StreamExt;
use std::convert::Infallible;
use std::pin::pin;
use tracing::{debug, warn};

/// `GET /sse/random_numbers`: one random number per tick until the client leaves
pub async fn random_numbers(State(state): State<AppState>) -> Response {
    let guard = match state.sessions.try_acquire("sse") {
        Ok(guard) => guard,
        Err(e) => {
            warn!(error = %e, "Event stream rejected");
            return e.into_response();
        }
    };

    let events = random_events(state.config.tick_interval, state.shutdown_listener());

    // The guard lives inside the stream, so the slot is released when axum
    // drops the body after the client disconnects.
    let body = stream! {
        let _guard = guard;
        let mut events = pin!(events);
        while let Some(event) = events.next().await {
            debug!(id = event.sequence, value = event.value, "Publishing random number");
            yield Ok::<_, Infallible>(event.to_sse_event());
        }
    };

    Sse::new(body)
        .keep_alive(KeepAlive::new().interval(state.config.keep_alive_interval))
        .into_response()
}
