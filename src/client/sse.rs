use super::ClientConfig;
use crate::pipeline::{self, Batcher, SseEvent};
use crate::server::routes::RANDOM_NUMBERS_PATH;
use crate::{ReactError, Result};
use eventsource_client::{self as es, Client};
use futures::StreamExt;
use tracing::debug;

/// Consumer of the random-number event stream
///
/// The client owns the underlying event stream and only reads from it when
/// asked, so dropping an `SseClient` closes the connection at once.
/// [`SseClient::next_batch`] runs events through the pipeline stages. The
/// connection is never re-established: a transport failure is returned
/// once and the stream ends.
pub struct SseClient {
    events: es::BoxStream<es::Result<es::SSE>>,
    batcher: Batcher<String>,
    finished: bool,
}

impl SseClient {
    /// Opens the event stream
    ///
    /// The connection is made lazily on the first read.
    pub fn connect(config: &ClientConfig) -> Result<Self> {
        let url = config.http_url(RANDOM_NUMBERS_PATH);
        let batcher = Batcher::new(config.batch_size)?;

        let client = es::ClientBuilder::for_url(&url)
            .map_err(event_source_error)?
            .header("Accept", "text/event-stream")
            .map_err(event_source_error)?
            .reconnect(es::ReconnectOptions::reconnect(false).build())
            .build();

        debug!(%url, batch_size = config.batch_size, "Subscribed to event stream");
        Ok(Self {
            events: client.stream(),
            batcher,
            finished: false,
        })
    }

    /// Next event from the stream, payload or not
    pub async fn next_event(&mut self) -> Result<SseEvent> {
        while !self.finished {
            match self.events.next().await {
                Some(Ok(es::SSE::Event(event))) => {
                    return Ok(SseEvent {
                        event_type: event.event_type,
                        data: event.data,
                    });
                }
                // Keep-alive comments carry no payload
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    self.finished = true;
                    return Err(event_source_error(e));
                }
                None => {
                    debug!("SSE stream ended");
                    self.finished = true;
                }
            }
        }
        Err(ReactError::Closed("Event stream ended".to_string()))
    }

    /// Waits until `batch_size` payloads have arrived and returns them in order
    pub async fn next_batch(&mut self) -> Result<Vec<String>> {
        loop {
            let event = self.next_event().await?;
            let Some(value) = pipeline::payload(&event) else {
                debug!(event_type = %event.event_type, "Skipping event without payload");
                continue;
            };
            if let Some(batch) = self.batcher.push(value) {
                return Ok(batch);
            }
        }
    }
}

fn event_source_error(err: es::Error) -> ReactError {
    ReactError::EventSource(err.to_string())
}
