//! Stages of the event-consumption pipeline
//!
//! The stream client composes these explicitly: each inbound event goes
//! through [`payload`] (filter and extract), then into a [`Batcher`].

use crate::sse::RANDOM_EVENT_TYPE;
use crate::{ReactError, Result};

/// An event as seen by a stream consumer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SseEvent {
    pub event_type: String,
    pub data: String,
}

/// Extracts the payload of a `random` event
///
/// Returns `None` for other event types and for events without data.
pub fn payload(event: &SseEvent) -> Option<String> {
    if event.event_type != RANDOM_EVENT_TYPE || event.data.is_empty() {
        None
    } else {
        Some(event.data.clone())
    }
}

/// Groups items into fixed-size batches
///
/// # Examples
///
/// ```
/// use reactsrv::pipeline::Batcher;
///
/// let mut batcher = Batcher::new(2).unwrap();
/// assert_eq!(batcher.push(1), None);
/// assert_eq!(batcher.push(2), Some(vec![1, 2]));
/// assert_eq!(batcher.pending(), 0);
/// ```
#[derive(Debug)]
pub struct Batcher<T> {
    size: usize,
    pending: Vec<T>,
}

impl<T> Batcher<T> {
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(ReactError::Config("Batch size must be at least 1".to_string()));
        }
        Ok(Self {
            size,
            pending: Vec::with_capacity(size),
        })
    }

    /// Adds an item; returns the batch it completes, if any
    pub fn push(&mut self, item: T) -> Option<Vec<T>> {
        self.pending.push(item);
        if self.pending.len() < self.size {
            return None;
        }
        Some(std::mem::replace(
            &mut self.pending,
            Vec::with_capacity(self.size),
        ))
    }

    /// Number of items waiting for the current batch to fill
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn size(&self) -> usize {
        self.size
    }
}

/// Renders a batch as `[a, b, c]`
pub fn format_batch<T: AsRef<str>>(batch: &[T]) -> String {
    let items: Vec<&str> = batch.iter().map(AsRef::as_ref).collect();
    format!("[{}]", items.join(", "))
}
