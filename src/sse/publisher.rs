use async_stream::stream;
use axum::response::sse::Event;
use futures::Stream;
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::time::{Instant, MissedTickBehavior, interval_at};

/// Event type tag carried by every random-number event
pub const RANDOM_EVENT_TYPE: &str = "random";

/// One tick of the random-number stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomEvent {
    /// Zero-based position in the stream, sent as the event id
    pub sequence: u64,
    pub value: i32,
}

impl RandomEvent {
    /// Wire form: `event: random`, `id: <sequence>`, `data: <value>`
    pub fn to_sse_event(&self) -> Event {
        Event::default()
            .event(RANDOM_EVENT_TYPE)
            .id(self.sequence.to_string())
            .data(self.value.to_string())
    }
}

/// Endless stream of random numbers, one per `period`
///
/// The first event fires one full period after the stream is created.
/// Late ticks are delayed rather than bursted, so consecutive events are
/// never closer than `period`. The stream ends when `shutdown` fires or
/// its sender is dropped; dropping the stream releases the timer.
pub fn random_events(
    period: Duration,
    mut shutdown: broadcast::Receiver<()>,
) -> impl Stream<Item = RandomEvent> {
    stream! {
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut sequence: u64 = 0;

        loop {
            let ticked = tokio::select! {
                _ = ticker.tick() => true,
                _ = shutdown.recv() => false,
            };
            if !ticked {
                tracing::debug!(emitted = sequence, "Random-number stream shut down");
                break;
            }

            yield RandomEvent { sequence, value: rand::random() };
            sequence += 1;
        }
    }
}
