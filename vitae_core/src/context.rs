//! Explicit context handed to every subsystem constructor.

use std::sync::Arc;

use crate::utils::config::Config;

/// Whether decorative motion is allowed. Checked once when subsystems are
/// built; a `Reduced` engine never creates particles or schedules timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionPreference {
    #[default]
    Full,
    Reduced,
}

impl MotionPreference {
    /// Reads `VITAE_REDUCED_MOTION` (`1` / `true`).
    pub fn from_env() -> Self {
        let reduced = std::env::var("VITAE_REDUCED_MOTION")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        Self::from_flag(reduced)
    }

    pub fn from_flag(reduced: bool) -> Self {
        if reduced {
            MotionPreference::Reduced
        } else {
            MotionPreference::Full
        }
    }

    /// Combines the host preference with the configuration override.
    pub fn resolve(host: MotionPreference, config: &Config) -> Self {
        if config.features.reduced_motion {
            MotionPreference::Reduced
        } else {
            host
        }
    }

    pub fn is_reduced(self) -> bool {
        self == MotionPreference::Reduced
    }
}

/// Read-only state shared by the navigation controller and the animation
/// engine. Owned by [`crate::site::Site`].
#[derive(Debug, Clone)]
pub struct SiteContext {
    config: Arc<Config>,
    motion: MotionPreference,
}

impl SiteContext {
    pub fn new(config: Config, host_motion: MotionPreference) -> Self {
        let motion = MotionPreference::resolve(host_motion, &config);
        Self {
            config: Arc::new(config),
            motion,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn motion(&self) -> MotionPreference {
        self.motion
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn config_override_forces_reduced_motion() {
        let mut config = Config::bundled().unwrap();
        config.features.reduced_motion = true;
        let ctx = SiteContext::new(config, MotionPreference::Full);
        assert!(ctx.motion().is_reduced());
    }

    #[test]
    fn host_preference_kept_without_override() {
        let ctx = SiteContext::new(Config::bundled().unwrap(), MotionPreference::Reduced);
        assert_eq!(ctx.motion(), MotionPreference::Reduced);
    }

    #[test]
    #[serial]
    fn reads_reduced_motion_from_env() {
        std::env::set_var("VITAE_REDUCED_MOTION", "true");
        assert_eq!(MotionPreference::from_env(), MotionPreference::Reduced);
        std::env::remove_var("VITAE_REDUCED_MOTION");
        assert_eq!(MotionPreference::from_env(), MotionPreference::Full);
    }
}
