#![forbid(unsafe_code)]

//! Cooperative pause/resume/cancel control for a running sort.
//!
//! [`ControlHandle`] is a thread-safe, cloneable handle over the two control
//! flags the engine polls at its checkpoints. Control calls may originate
//! from a different thread than the one running the algorithm (a UI thread,
//! a test harness); the engine side only ever reads the flags and blocks in
//! [`wait_while_paused`](ControlHandle::wait_while_paused).
//!
//! # Example
//!
//! ```
//! use mvis_core::ControlHandle;
//! use std::time::Duration;
//!
//! let control = ControlHandle::new();
//! let worker = control.clone();
//!
//! std::thread::spawn(move || {
//!     while !worker.is_cancelled() {
//!         // do a unit of work, then honor pause between units
//!         if worker.wait_while_paused(Duration::from_millis(25)) {
//!             break;
//!         }
//!     }
//! });
//!
//! control.cancel();
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Condvar, Mutex};
use web_time::Duration;

struct ControlInner {
    paused: AtomicBool,
    cancelled: AtomicBool,
    notify: (Mutex<()>, Condvar),
}

/// Thread-safe, cloneable pause/cancel control handle.
///
/// Clones share state: pausing or cancelling through any clone is observed
/// by all of them. Cancellation is cooperative — it is honored at the next
/// engine checkpoint, not preemptively — and permanent for the current sort
/// call (the engine clears both flags when a new sort starts).
#[derive(Clone)]
pub struct ControlHandle {
    inner: Arc<ControlInner>,
}

impl ControlHandle {
    /// Create a handle with both flags clear.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(ControlInner {
                paused: AtomicBool::new(false),
                cancelled: AtomicBool::new(false),
                notify: (Mutex::new(()), Condvar::new()),
            }),
        }
    }

    /// Request a pause.
    ///
    /// Only the merge phase observes pause, between comparisons; the split
    /// and per-run sort phases run to their next checkpoint regardless.
    /// Pausing an already-paused sort is a no-op.
    pub fn pause(&self) {
        self.inner.paused.store(true, Ordering::Release);
        #[cfg(feature = "tracing")]
        tracing::debug!("pause requested");
    }

    /// Clear a pause and wake the engine if it is waiting.
    pub fn resume(&self) {
        self.inner.paused.store(false, Ordering::Release);
        self.notify_waiters();
        #[cfg(feature = "tracing")]
        tracing::debug!("resume requested");
    }

    /// Request cancellation and clear any pause.
    ///
    /// All phases observe cancellation at their next checkpoint: the start
    /// of each run in the sort phase, the start of each pair in a merge
    /// pass, and each comparison inside a merge. Idempotent; never blocks.
    pub fn cancel(&self) {
        self.inner.cancelled.store(true, Ordering::Release);
        self.inner.paused.store(false, Ordering::Release);
        self.notify_waiters();
        #[cfg(feature = "tracing")]
        tracing::debug!("cancellation requested");
    }

    /// Whether a pause is currently requested.
    #[inline]
    pub fn is_paused(&self) -> bool {
        self.inner.paused.load(Ordering::Acquire)
    }

    /// Whether cancellation has been requested.
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.load(Ordering::Acquire)
    }

    /// Clear both flags. The engine calls this at the start of each sort.
    pub fn reset(&self) {
        self.inner.paused.store(false, Ordering::Release);
        self.inner.cancelled.store(false, Ordering::Release);
        self.notify_waiters();
    }

    /// Block while paused, waking in `poll`-sized slices.
    ///
    /// Returns `true` if cancellation was requested (before or during the
    /// wait), `false` once the pause has been lifted. A `resume` or `cancel`
    /// call interrupts the wait immediately via the condvar; the poll slice
    /// only bounds spurious-wakeup handling.
    pub fn wait_while_paused(&self, poll: Duration) -> bool {
        loop {
            if self.is_cancelled() {
                return true;
            }
            if !self.is_paused() {
                return false;
            }
            let (lock, cvar) = &self.inner.notify;
            let guard = lock.lock().unwrap_or_else(|e| e.into_inner());
            // Re-check under the lock so a flag flip between the check and
            // the wait cannot strand us for a full slice.
            if self.is_cancelled() || !self.is_paused() {
                continue;
            }
            let _ = cvar
                .wait_timeout(guard, poll)
                .unwrap_or_else(|e| e.into_inner());
        }
    }

    fn notify_waiters(&self) {
        let (lock, cvar) = &self.inner.notify;
        let _guard = lock.lock().unwrap_or_else(|e| e.into_inner());
        cvar.notify_all();
    }
}

impl Default for ControlHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ControlHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ControlHandle")
            .field("paused", &self.is_paused())
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}
