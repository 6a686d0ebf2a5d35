//! Fixed delay between RPC lookups

use std::time::Duration;

/// Default pause between program IDs
pub const DEFAULT_DELAY_MS: u64 = 1000;

/// Sleeps for a constant duration. No backoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacer {
    delay: Duration,
}

impl Pacer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub async fn pause(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

impl Default for Pacer {
    fn default() -> Self {
        Self::from_millis(DEFAULT_DELAY_MS)
    }
}
