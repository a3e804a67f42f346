use crate::animation::surface::Vec2;
use crate::animation::timeline::{ease_out_cubic, Timer};
use crate::bindings::ElementKey;
use crate::context::MotionPreference;

/// Snapshot of one ripple for drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleFrame {
    pub origin: Vec2,
    /// Fraction of the maximum radius, eased.
    pub spread: f32,
    pub alpha: f32,
}

#[derive(Debug, Clone)]
struct Ripple {
    key: ElementKey,
    origin: Vec2,
    timer: Timer,
}

/// Click ripples. Each ripple lives for a fixed duration and is then dropped.
#[derive(Debug, Clone)]
pub struct Ripples {
    motion: MotionPreference,
    duration_ms: u64,
    active: Vec<Ripple>,
}

impl Ripples {
    pub fn new(duration_ms: u64, motion: MotionPreference) -> Self {
        Self {
            motion,
            duration_ms,
            active: Vec::new(),
        }
    }

    /// Spawns a ripple at `origin` (element-local). No-op under reduced motion.
    pub fn trigger(&mut self, key: ElementKey, origin: Vec2, now_ms: u64) -> bool {
        if self.motion.is_reduced() {
            return false;
        }
        self.active.push(Ripple {
            key,
            origin,
            timer: Timer {
                start_ms: now_ms,
                duration_ms: self.duration_ms,
            },
        });
        true
    }

    /// Ripples currently running on `key`.
    pub fn frames<'a>(&'a self, key: &'a ElementKey, now_ms: u64) -> impl Iterator<Item = RippleFrame> + 'a {
        self.active
            .iter()
            .filter(move |r| &r.key == key && !r.timer.is_finished(now_ms))
            .map(move |r| {
                let t = r.timer.progress(now_ms);
                RippleFrame {
                    origin: r.origin,
                    spread: ease_out_cubic(t),
                    alpha: 0.35 * (1.0 - t),
                }
            })
    }

    /// Drops finished ripples; returns true while any remain.
    pub fn update(&mut self, now_ms: u64) -> bool {
        self.active.retain(|r| !r.timer.is_finished(now_ms));
        !self.active.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ripple_expands_then_expires() {
        let mut ripples = Ripples::new(600, MotionPreference::Full);
        let key = ElementKey::named("button");
        assert!(ripples.trigger(key.clone(), Vec2::new(10.0, 5.0), 0));

        let mid: Vec<_> = ripples.frames(&key, 300).collect();
        assert_eq!(mid.len(), 1);
        assert!(mid[0].spread > 0.5);
        assert!(mid[0].alpha > 0.0);

        assert!(!ripples.update(600));
        assert_eq!(ripples.frames(&key, 600).count(), 0);
    }

    #[test]
    fn reduced_motion_never_ripples() {
        let mut ripples = Ripples::new(600, MotionPreference::Reduced);
        assert!(!ripples.trigger(ElementKey::named("b"), Vec2::ZERO, 0));
        assert!(ripples.is_empty());
    }
}
