use crate::animation::Spring;
use crate::context::MotionPreference;

/// Collapsible navigation menu used below the breakpoint. The open flag is
/// the source of truth; the spring only drives the slide animation.
#[derive(Debug, Clone)]
pub struct MobileMenu {
    enabled: bool,
    motion: MotionPreference,
    spring: Spring,
}

impl MobileMenu {
    pub fn new(enabled: bool, motion: MotionPreference) -> Self {
        Self {
            enabled,
            motion,
            spring: Spring::default(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.spring.is_open()
    }

    /// Flips the menu. Returns the new open state.
    pub fn toggle(&mut self) -> bool {
        if !self.enabled {
            return false;
        }
        if self.is_open() {
            self.set_target(0.0);
        } else {
            self.set_target(1.0);
        }
        self.is_open()
    }

    /// Closes the menu. Returns true when it was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        if was_open {
            self.set_target(0.0);
        }
        was_open
    }

    /// Slide progress in 0..=1.
    pub fn progress(&self) -> f32 {
        self.spring.position
    }

    /// Advances the slide animation; true while moving.
    pub fn update(&mut self) -> bool {
        if self.spring.is_settled() {
            return false;
        }
        self.spring.update()
    }

    fn set_target(&mut self, target: f32) {
        self.spring.set_target(target);
        if self.motion.is_reduced() {
            self.spring.snap();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_and_close() {
        let mut menu = MobileMenu::new(true, MotionPreference::Full);
        assert!(menu.toggle());
        assert!(menu.is_open());
        assert!(menu.close());
        assert!(!menu.is_open());
        assert!(!menu.close());
    }

    #[test]
    fn disabled_menu_never_opens() {
        let mut menu = MobileMenu::new(false, MotionPreference::Full);
        assert!(!menu.toggle());
        assert!(!menu.is_open());
    }

    #[test]
    fn reduced_motion_snaps() {
        let mut menu = MobileMenu::new(true, MotionPreference::Reduced);
        menu.toggle();
        assert_eq!(menu.progress(), 1.0);
        assert!(!menu.update());
    }
}
