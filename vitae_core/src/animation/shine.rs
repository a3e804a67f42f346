use std::collections::HashMap;

use crate::animation::timeline::Timer;
use crate::bindings::ElementKey;
use crate::context::MotionPreference;

/// Light sweep across a control when the pointer enters it. A new sweep can
/// only start once the previous one has finished.
#[derive(Debug, Clone)]
pub struct ShineSweeps {
    motion: MotionPreference,
    duration_ms: u64,
    sweeps: HashMap<ElementKey, Timer>,
}

impl ShineSweeps {
    pub fn new(duration_ms: u64, motion: MotionPreference) -> Self {
        Self {
            motion,
            duration_ms,
            sweeps: HashMap::new(),
        }
    }

    pub fn trigger(&mut self, key: ElementKey, now_ms: u64) -> bool {
        if self.motion.is_reduced() {
            return false;
        }
        if let Some(running) = self.sweeps.get(&key) {
            if !running.is_finished(now_ms) {
                return false;
            }
        }
        self.sweeps.insert(
            key,
            Timer {
                start_ms: now_ms,
                duration_ms: self.duration_ms,
            },
        );
        true
    }

    /// Sweep band position in 0..=1 across the element, while running.
    pub fn position(&self, key: &ElementKey, now_ms: u64) -> Option<f32> {
        self.sweeps
            .get(key)
            .filter(|t| !t.is_finished(now_ms))
            .map(|t| t.progress(now_ms))
    }

    pub fn update(&mut self, now_ms: u64) -> bool {
        self.sweeps.retain(|_, t| !t.is_finished(now_ms));
        !self.sweeps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_runs_once_per_hover() {
        let mut shine = ShineSweeps::new(700, MotionPreference::Full);
        let key = ElementKey::named("nav/perfil");
        assert!(shine.trigger(key.clone(), 0));
        assert!(!shine.trigger(key.clone(), 100));
        assert_eq!(shine.position(&key, 350), Some(0.5));
        assert_eq!(shine.position(&key, 700), None);
        assert!(shine.trigger(key, 800));
    }
}
