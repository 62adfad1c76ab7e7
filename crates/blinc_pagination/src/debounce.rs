//! Cancel-and-rearm single-shot timer
//!
//! The host drives time: `arm` on every edit, `poll` once per frame. A value
//! comes out of `poll` once, after the quiescence window has elapsed since
//! the most recent `arm`.
//!
//! ```ignore
//! let mut debounce = Debounce::new(Duration::from_millis(300));
//! debounce.arm("1", now);
//! debounce.arm("12", now + ms(100)); // replaces "1", restarts the window
//! assert_eq!(debounce.poll(now + ms(350)), None);
//! assert_eq!(debounce.poll(now + ms(400)), Some("12"));
//! ```

use std::time::{Duration, Instant};

use tracing::trace;

/// Default quiescence window for page-jump input
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Single-shot timer holding the latest armed value
#[derive(Clone, Debug)]
pub struct Debounce<T> {
    window: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debounce<T> {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Change the quiescence window; a pending value keeps its arm time
    pub fn set_window(&mut self, window: Duration) {
        self.window = window;
    }

    /// Replace any pending value and restart the window at `now`
    pub fn arm(&mut self, value: T, now: Instant) {
        if self.pending.is_some() {
            trace!("debounce rearmed");
        } else {
            trace!(window_ms = self.window.as_millis() as u64, "debounce armed");
        }
        self.pending = Some((value, now));
    }

    /// Drop the pending value without firing
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(value, _)| value)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending value will fire, if any
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, armed)| *armed + self.window)
    }

    /// Take the pending value if its window has elapsed at `now`
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match self.deadline() {
            Some(deadline) if now >= deadline => self.cancel(),
            _ => None,
        }
    }
}

impl<T> Default for Debounce<T> {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}
