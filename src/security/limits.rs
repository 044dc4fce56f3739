use crate::{ReactError, Result};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::Instant;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};

/// Tracks long-lived sessions (event streams and echo sockets)
///
/// A slot is taken before a session starts and released when its
/// [`SessionGuard`] is dropped, which happens when the peer disconnects.
#[derive(Debug)]
pub struct SessionTracker {
    active_sessions: AtomicUsize,
    total_sessions: AtomicU64,
    slots: Arc<Semaphore>,
    max_sessions: usize,
}

impl SessionTracker {
    pub fn new(max_sessions: usize) -> Self {
        Self {
            active_sessions: AtomicUsize::new(0),
            total_sessions: AtomicU64::new(0),
            slots: Arc::new(Semaphore::new(max_sessions)),
            max_sessions,
        }
    }

    /// Attempt to take a session slot without waiting
    pub fn try_acquire(self: &Arc<Self>, kind: &'static str) -> Result<SessionGuard> {
        let permit = self
            .slots
            .clone()
            .try_acquire_owned()
            .map_err(|_| ReactError::SessionLimit {
                max: self.max_sessions,
            })?;

        let active = self.active_sessions.fetch_add(1, Ordering::SeqCst) + 1;
        let total = self.total_sessions.fetch_add(1, Ordering::SeqCst) + 1;

        tracing::info!(
            kind,
            active_sessions = active,
            total_sessions = total,
            "Session opened"
        );

        Ok(SessionGuard {
            _permit: permit,
            tracker: Arc::clone(self),
            kind,
            start_time: Instant::now(),
        })
    }

    /// Get current metrics
    pub fn metrics(&self) -> SessionMetrics {
        SessionMetrics {
            active_sessions: self.active_sessions.load(Ordering::SeqCst),
            total_sessions: self.total_sessions.load(Ordering::SeqCst),
            available_slots: self.slots.available_permits(),
            max_sessions: self.max_sessions,
        }
    }
}

/// RAII guard for one open session
#[derive(Debug)]
pub struct SessionGuard {
    _permit: OwnedSemaphorePermit,
    tracker: Arc<SessionTracker>,
    kind: &'static str,
    start_time: Instant,
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        let active = self
            .tracker
            .active_sessions
            .fetch_sub(1, Ordering::SeqCst)
            - 1;
        let duration = self.start_time.elapsed();

        tracing::info!(
            kind = self.kind,
            active_sessions = active,
            session_duration_ms = duration.as_millis(),
            "Session closed"
        );
    }
}

/// Session metrics for monitoring
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionMetrics {
    pub active_sessions: usize,
    pub total_sessions: u64,
    pub available_slots: usize,
    pub max_sessions: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_limit() {
        let tracker = Arc::new(SessionTracker::new(2));

        let guard1 = tracker.try_acquire("echo").unwrap();
        let _guard2 = tracker.try_acquire("sse").unwrap();

        assert!(matches!(
            tracker.try_acquire("echo"),
            Err(ReactError::SessionLimit { max: 2 })
        ));

        // Dropping a guard frees its slot
        drop(guard1);
        let _guard3 = tracker.try_acquire("echo").unwrap();
    }

    #[test]
    fn test_metrics() {
        let tracker = Arc::new(SessionTracker::new(3));
        let guard = tracker.try_acquire("echo").unwrap();
        drop(tracker.try_acquire("sse").unwrap());

        assert_eq!(
            tracker.metrics(),
            SessionMetrics {
                active_sessions: 1,
                total_sessions: 2,
                available_slots: 2,
                max_sessions: 3,
            }
        );

        drop(guard);
        assert_eq!(tracker.metrics().active_sessions, 0);
        assert_eq!(tracker.metrics().available_slots, 3);
    }

    #[test]
    fn test_zero_sessions_rejects_everything() {
        let tracker = Arc::new(SessionTracker::new(0));
        assert!(tracker.try_acquire("sse").is_err());
        assert_eq!(tracker.metrics().total_sessions, 0);
    }
}
