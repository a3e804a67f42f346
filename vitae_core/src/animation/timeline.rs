use std::collections::HashMap;

use crate::bindings::ElementKey;
use crate::context::MotionPreference;

/// A one-shot timer: starts at `start_ms`, runs for `duration_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    pub start_ms: u64,
    pub duration_ms: u64,
}

impl Timer {
    /// Linear progress in 0..=1; 0 before the start.
    pub fn progress(&self, now_ms: u64) -> f32 {
        if now_ms <= self.start_ms {
            return 0.0;
        }
        if self.duration_ms == 0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) as f32 / self.duration_ms as f32).min(1.0)
    }

    pub fn end_ms(&self) -> u64 {
        self.start_ms + self.duration_ms
    }

    pub fn is_finished(&self, now_ms: u64) -> bool {
        now_ms >= self.end_ms()
    }
}

/// Keyed one-shot timers for decorative effects.
///
/// Under reduced motion nothing is ever scheduled and every key reports as
/// finished, so callers render the final state directly.
#[derive(Debug, Clone)]
pub struct Timeline {
    motion: MotionPreference,
    timers: HashMap<ElementKey, Timer>,
    scheduled_total: usize,
}

impl Timeline {
    pub fn new(motion: MotionPreference) -> Self {
        Self {
            motion,
            timers: HashMap::new(),
            scheduled_total: 0,
        }
    }

    /// Schedules (or reschedules) a timer. Returns false when motion is reduced.
    pub fn schedule(&mut self, key: ElementKey, start_ms: u64, duration_ms: u64) -> bool {
        if self.motion.is_reduced() {
            return false;
        }
        self.timers.insert(
            key,
            Timer {
                start_ms,
                duration_ms,
            },
        );
        self.scheduled_total += 1;
        true
    }

    /// Progress of a key's timer, `None` when it was never scheduled.
    pub fn progress(&self, key: &ElementKey, now_ms: u64) -> Option<f32> {
        if self.motion.is_reduced() {
            return Some(1.0);
        }
        self.timers.get(key).map(|t| t.progress(now_ms))
    }

    /// Eased progress, treating unscheduled keys as finished.
    pub fn eased_or_done(&self, key: &ElementKey, now_ms: u64) -> f32 {
        ease_out_cubic(self.progress(key, now_ms).unwrap_or(1.0))
    }

    pub fn contains(&self, key: &ElementKey) -> bool {
        self.timers.contains_key(key)
    }

    /// True while any timer has not yet finished.
    pub fn is_animating(&self, now_ms: u64) -> bool {
        self.timers.values().any(|t| !t.is_finished(now_ms))
    }

    /// Number of timers ever scheduled.
    pub fn scheduled_total(&self) -> usize {
        self.scheduled_total
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }
}

/// Cubic ease-out for smooth deceleration
pub fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t.clamp(0.0, 1.0)).powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_progress_is_linear_and_clamped() {
        let timer = Timer {
            start_ms: 100,
            duration_ms: 200,
        };
        assert_eq!(timer.progress(50), 0.0);
        assert_eq!(timer.progress(200), 0.5);
        assert_eq!(timer.progress(1_000), 1.0);
        assert!(timer.is_finished(300));
    }

    #[test]
    fn reduced_motion_schedules_nothing() {
        let mut timeline = Timeline::new(MotionPreference::Reduced);
        let key = ElementKey::named("x");
        assert!(!timeline.schedule(key.clone(), 0, 100));
        assert_eq!(timeline.scheduled_total(), 0);
        assert_eq!(timeline.progress(&key, 0), Some(1.0));
        assert!(!timeline.is_animating(0));
    }

    #[test]
    fn rescheduling_replaces_timer() {
        let mut timeline = Timeline::new(MotionPreference::Full);
        let key = ElementKey::named("x");
        timeline.schedule(key.clone(), 0, 100);
        timeline.schedule(key.clone(), 500, 100);
        assert_eq!(timeline.len(), 1);
        assert_eq!(timeline.scheduled_total(), 2);
        assert_eq!(timeline.progress(&key, 200), Some(0.0));
        assert!(timeline.is_animating(550));
    }

    #[test]
    fn ease_out_cubic_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!(ease_out_cubic(0.5) > 0.5);
    }
}
