//! Client-side request throttling.
//!
//! The exporter does not read GitHub's rate limit headers. It pauses for a
//! fixed time after each request instead, whether that request succeeded or
//! not.

use std::time::Duration;
use tracing::trace;

/// Policy applied between consecutive API requests.
#[allow(async_fn_in_trait)]
pub trait RateLimiter {
    /// Waits before the next request may be sent.
    async fn pause(&self);
}

/// Sleeps for a fixed duration on every pause.
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay {
    delay: Duration,
}

impl FixedDelay {
    /// Creates a limiter that sleeps for `delay`.
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Returns the configured delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl RateLimiter for FixedDelay {
    async fn pause(&self) {
        if self.delay.is_zero() {
            return;
        }

        trace!(delay_ms = self.delay.as_millis() as u64, "Pausing before next request");
        tokio::time::sleep(self.delay).await;
    }
}

/// Never pauses.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl RateLimiter for NoDelay {
    async fn pause(&self) {}
}
