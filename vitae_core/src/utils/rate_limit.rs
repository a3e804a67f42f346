//! Rate limiters for high-frequency host events.
//!
//! Both limiters are driven by the caller's millisecond clock rather than by
//! timers, so the host decides when to poll them (typically on every tick).

/// Leading + trailing throttle: the first value in a window passes straight
/// through, the last value offered during the window is released once the
/// window has elapsed.
#[derive(Debug, Clone)]
pub struct Throttle<T> {
    interval_ms: u64,
    last_fire: Option<u64>,
    pending: Option<T>,
}

impl<T> Throttle<T> {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last_fire: None,
            pending: None,
        }
    }

    /// Offers a value. Returns it immediately when the window is open,
    /// otherwise keeps it as the trailing value.
    pub fn offer(&mut self, value: T, now_ms: u64) -> Option<T> {
        if self.window_open(now_ms) {
            self.last_fire = Some(now_ms);
            self.pending = None;
            Some(value)
        } else {
            self.pending = Some(value);
            None
        }
    }

    /// Releases the trailing value once the window has elapsed.
    pub fn flush(&mut self, now_ms: u64) -> Option<T> {
        if self.pending.is_some() && self.window_open(now_ms) {
            self.last_fire = Some(now_ms);
            self.pending.take()
        } else {
            None
        }
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    fn window_open(&self, now_ms: u64) -> bool {
        match self.last_fire {
            None => true,
            Some(last) => now_ms.saturating_sub(last) >= self.interval_ms,
        }
    }
}

/// Trailing debounce: a value is released only after `quiet_ms` without a
/// newer value.
#[derive(Debug, Clone)]
pub struct Debounce<T> {
    quiet_ms: u64,
    pending: Option<(T, u64)>,
}

impl<T> Debounce<T> {
    pub fn new(quiet_ms: u64) -> Self {
        Self {
            quiet_ms,
            pending: None,
        }
    }

    /// Replaces any pending value and restarts the quiet period.
    pub fn push(&mut self, value: T, now_ms: u64) {
        self.pending = Some((value, now_ms));
    }

    /// Releases the pending value once the quiet period has passed.
    pub fn poll(&mut self, now_ms: u64) -> Option<T> {
        match &self.pending {
            Some((_, at)) if now_ms.saturating_sub(*at) >= self.quiet_ms => {
                self.pending.take().map(|(value, _)| value)
            }
            _ => None,
        }
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}
