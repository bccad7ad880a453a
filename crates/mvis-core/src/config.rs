#![forbid(unsafe_code)]

//! Sort configuration.

use web_time::Duration;

use crate::error::ConfigError;

/// Default maximum run length for the split phase.
pub const DEFAULT_RUN_SIZE: usize = 10;

/// Default slice the merge loop sleeps in while paused.
///
/// A `resume` or `cancel` interrupts the wait through the condvar, so this
/// only bounds spurious wakeups; it does not add resume latency.
pub const DEFAULT_PAUSE_POLL: Duration = Duration::from_millis(25);

/// Configuration for one sort call.
///
/// `run_size` must be positive; [`validate`](Self::validate) rejects zero
/// before any phase runs or step is emitted. (Non-integer and non-finite
/// sizes are unrepresentable by the type.)
#[derive(Debug, Clone)]
pub struct SortConfig {
    /// Maximum length of each run produced by the split phase.
    pub run_size: usize,
    /// Retain every emitted step in an internal trace, separate from the
    /// live observer notifications.
    pub record_trace: bool,
    /// Slice the merge loop waits in while paused.
    pub pause_poll: Duration,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            run_size: DEFAULT_RUN_SIZE,
            record_trace: false,
            pause_poll: DEFAULT_PAUSE_POLL,
        }
    }
}

impl SortConfig {
    /// Configuration with the default run size, no trace recording.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum run length.
    pub fn with_run_size(mut self, run_size: usize) -> Self {
        self.run_size = run_size;
        self
    }

    /// Enable or disable trace recording.
    pub fn with_record_trace(mut self, record_trace: bool) -> Self {
        self.record_trace = record_trace;
        self
    }

    /// Set the pause poll slice.
    pub fn with_pause_poll(mut self, pause_poll: Duration) -> Self {
        self.pause_poll = pause_poll;
        self
    }

    /// Reject invalid configurations before any work starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.run_size == 0 {
            return Err(ConfigError::InvalidRunSize(self.run_size));
        }
        Ok(())
    }
}
