//! Fixed-interval request throttle.
//!
//! A single-slot gate: it spaces out consecutive calls by at least a minimum
//! interval. It is not a token bucket and does not admit bursts.

use log::debug;
use std::time::Duration;
use tokio::time::Instant;

/// Enforces a minimum spacing between outgoing requests.
#[derive(Debug)]
pub struct RateGate {
    /// Minimum interval between calls.
    min_interval: Duration,
    /// Completion time of the previous `throttle` call.
    last_call: Option<Instant>,
}

impl RateGate {
    /// Creates a gate that has never been passed.
    pub fn new(min_interval: Duration) -> Self {
        RateGate {
            min_interval,
            last_call: None,
        }
    }

    /// How long a call made now would wait.
    pub fn pending_wait(&self) -> Duration {
        match self.last_call {
            Some(last) => self.min_interval.saturating_sub(last.elapsed()),
            None => Duration::ZERO,
        }
    }

    /// Waits until `min_interval` has elapsed since the previous call.
    ///
    /// The first call never waits. Every call records its completion time,
    /// whether or not it waited.
    pub async fn throttle(&mut self) {
        let wait = self.pending_wait();
        if !wait.is_zero() {
            debug!("Rate limiting: waiting {:.1}s...", wait.as_secs_f64());
            tokio::time::sleep(wait).await;
        }
        self.last_call = Some(Instant::now());
    }
}
