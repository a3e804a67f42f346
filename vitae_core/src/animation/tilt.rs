use std::collections::HashMap;

use crate::animation::surface::Vec2;
use crate::bindings::ElementKey;
use crate::context::MotionPreference;

/// Rotation applied to a hovered card, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TiltAngles {
    /// Rotation around the horizontal axis; positive tips the top away.
    pub rotate_x: f32,
    /// Rotation around the vertical axis; positive turns the right edge away.
    pub rotate_y: f32,
}

impl TiltAngles {
    /// Normalized offset of the pointer from the card centre, in -1..=1.
    pub fn normalized(&self, max_deg: f32) -> Vec2 {
        if max_deg <= 0.0 {
            return Vec2::ZERO;
        }
        Vec2::new(self.rotate_y / max_deg, -self.rotate_x / max_deg)
    }
}

/// Angles for a pointer at `pointer` inside a card of `size`.
pub fn tilt_for(pointer: Vec2, size: Vec2, max_deg: f32) -> TiltAngles {
    if size.x <= 0.0 || size.y <= 0.0 {
        return TiltAngles::default();
    }
    let dx = ((pointer.x - size.x / 2.0) / (size.x / 2.0)).clamp(-1.0, 1.0);
    let dy = ((pointer.y - size.y / 2.0) / (size.y / 2.0)).clamp(-1.0, 1.0);
    TiltAngles {
        rotate_x: -dy * max_deg,
        rotate_y: dx * max_deg,
    }
}

#[derive(Debug, Clone, Copy)]
struct Hover {
    pointer: Vec2,
    size: Vec2,
}

/// Per-card hover state for the tilt effect.
#[derive(Debug, Clone)]
pub struct TiltTracker {
    motion: MotionPreference,
    max_deg: f32,
    hovered: HashMap<ElementKey, Hover>,
}

impl TiltTracker {
    pub fn new(max_deg: f32, motion: MotionPreference) -> Self {
        Self {
            motion,
            max_deg,
            hovered: HashMap::new(),
        }
    }

    pub fn pointer_moved(&mut self, key: ElementKey, pointer: Vec2, size: Vec2) {
        if self.motion.is_reduced() {
            return;
        }
        self.hovered.insert(key, Hover { pointer, size });
    }

    /// Pointer left the card; it snaps back flat.
    pub fn pointer_left(&mut self, key: &ElementKey) {
        self.hovered.remove(key);
    }

    pub fn angles(&self, key: &ElementKey) -> TiltAngles {
        self.hovered
            .get(key)
            .map(|h| tilt_for(h.pointer, h.size, self.max_deg))
            .unwrap_or_default()
    }

    /// Local pointer position on a hovered card.
    pub fn pointer(&self, key: &ElementKey) -> Option<Vec2> {
        self.hovered.get(key).map(|h| h.pointer)
    }

    pub fn is_hovered(&self, key: &ElementKey) -> bool {
        self.hovered.contains_key(key)
    }

    pub fn max_deg(&self) -> f32 {
        self.max_deg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centre_is_flat_and_corners_hit_max() {
        let size = Vec2::new(200.0, 100.0);
        assert_eq!(tilt_for(Vec2::new(100.0, 50.0), size, 10.0), TiltAngles::default());

        let corner = tilt_for(Vec2::new(200.0, 0.0), size, 10.0);
        assert_eq!(corner.rotate_y, 10.0);
        assert_eq!(corner.rotate_x, 10.0);
    }

    #[test]
    fn leaving_resets_tilt() {
        let mut tracker = TiltTracker::new(10.0, MotionPreference::Full);
        let key = ElementKey::child("certificaciones", 0);
        tracker.pointer_moved(key.clone(), Vec2::new(0.0, 0.0), Vec2::new(100.0, 100.0));
        assert!(tracker.is_hovered(&key));
        assert_ne!(tracker.angles(&key), TiltAngles::default());

        tracker.pointer_left(&key);
        assert_eq!(tracker.angles(&key), TiltAngles::default());
    }

    #[test]
    fn reduced_motion_stays_flat() {
        let mut tracker = TiltTracker::new(10.0, MotionPreference::Reduced);
        let key = ElementKey::named("card");
        tracker.pointer_moved(key.clone(), Vec2::ZERO, Vec2::new(10.0, 10.0));
        assert!(!tracker.is_hovered(&key));
    }
}
