//! Debounced autosave timer.
//!
//! # Responsibility
//! - Track a single pending autosave deadline for the store.
//! - Replace the deadline on every schedule so only the last edit in a
//!   typing burst triggers a save.
//!
//! # Invariants
//! - At most one deadline is pending at a time.
//! - Firing clears the deadline; a fired timer stays idle until rescheduled.
//!
//! Single-threaded by design: the host event loop polls the owning store,
//! no background timer thread exists.

/// Delay between the last draft edit and the autosave attempt.
pub const DEFAULT_AUTOSAVE_DELAY_MS: i64 = 800;

/// One-shot timer whose deadline is replaced on every schedule.
#[derive(Debug)]
pub struct DebounceTimer {
    delay_ms: i64,
    deadline: Option<i64>,
}

impl DebounceTimer {
    pub fn new(delay_ms: i64) -> Self {
        Self {
            delay_ms,
            deadline: None,
        }
    }

    /// Arms the timer at `now_ms + delay`, cancelling any pending deadline.
    pub fn schedule(&mut self, now_ms: i64) {
        self.deadline = Some(now_ms + self.delay_ms);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns whether a pending deadline has been reached.
    pub fn is_due(&self, now_ms: i64) -> bool {
        matches!(self.deadline, Some(deadline) if now_ms >= deadline)
    }

    /// Clears and reports a reached deadline.
    ///
    /// Returns `false` when the timer is idle or the deadline is still in
    /// the future.
    pub fn fire_if_due(&mut self, now_ms: i64) -> bool {
        if self.is_due(now_ms) {
            self.deadline = None;
            return true;
        }
        false
    }
}

impl Default for DebounceTimer {
    fn default() -> Self {
        Self::new(DEFAULT_AUTOSAVE_DELAY_MS)
    }
}
