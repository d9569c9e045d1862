//! Timeout helpers used across the crate.
//!
//! The reader falls back to [`DEFAULT_TIMEOUT_MS`] when neither the settings
//! nor the individual transfer specify a deadline.

use std::time::Duration;

/// Default response deadline in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 1000;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Default response deadline as Duration.
pub fn default_timeout() -> Duration {
    ms(DEFAULT_TIMEOUT_MS)
}
