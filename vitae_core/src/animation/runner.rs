use tracing::debug;

use crate::animation::particles::ParticleField;
use crate::animation::surface::Surface;

/// Identifies one run of the loop. Frames carrying an older token are stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameToken(u64);

impl FrameToken {
    pub fn generation(self) -> u64 {
        self.0
    }
}

/// Run/stop controller around a [`ParticleField`].
///
/// The host asks for animation frames while the loop is running and hands
/// each one back through [`ParticleLoop::frame`] together with the token it
/// got from [`ParticleLoop::start`]. `stop` bumps the generation, so a frame
/// that was already in flight when the loop stopped is dropped untouched.
#[derive(Debug, Clone)]
pub struct ParticleLoop {
    field: ParticleField,
    generation: u64,
    running: bool,
    frames_drawn: u64,
    last_frame_ms: Option<u64>,
}

impl ParticleLoop {
    pub fn new(field: ParticleField) -> Self {
        Self {
            field,
            generation: 0,
            running: false,
            frames_drawn: 0,
            last_frame_ms: None,
        }
    }

    /// Starts the loop. An empty or destroyed field never starts.
    pub fn start(&mut self) -> Option<FrameToken> {
        if self.field.is_empty() || self.field.is_destroyed() {
            return None;
        }
        if !self.running {
            self.generation += 1;
            self.running = true;
            debug!(generation = self.generation, "particle loop started");
        }
        Some(FrameToken(self.generation))
    }

    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            self.generation += 1;
            debug!(generation = self.generation, "particle loop stopped");
        }
    }

    /// Token of the current run, if running.
    pub fn token(&self) -> Option<FrameToken> {
        self.running.then_some(FrameToken(self.generation))
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Delivers one animation frame. Returns false (and touches nothing)
    /// for stale tokens or a stopped loop.
    pub fn frame<S: Surface + ?Sized>(&mut self, token: FrameToken, now_ms: u64, surface: &mut S) -> bool {
        if !self.running || token.0 != self.generation {
            return false;
        }
        self.field.tick(surface);
        self.frames_drawn += 1;
        self.last_frame_ms = Some(now_ms);
        true
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    pub fn last_frame_ms(&self) -> Option<u64> {
        self.last_frame_ms
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut ParticleField {
        &mut self.field
    }

    /// Stops the loop and tears the field down.
    pub fn destroy(&mut self) {
        self.stop();
        self.field.destroy();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::particles::{Particle, DEFAULT_ACCENT};
    use crate::animation::{RecordingSurface, Vec2};
    use crate::utils::config::ParticleTuning;

    fn running_loop() -> ParticleLoop {
        let particle = Particle {
            position: Vec2::new(10.0, 10.0),
            velocity: Vec2::new(1.0, 0.0),
            radius: 2.0,
            opacity: 0.5,
            color: DEFAULT_ACCENT,
        };
        ParticleLoop::new(ParticleField::from_particles(
            ParticleTuning::default(),
            DEFAULT_ACCENT,
            Vec2::new(100.0, 100.0),
            vec![particle],
        ))
    }

    #[test]
    fn frame_after_stop_is_ignored() {
        let mut particle_loop = running_loop();
        let mut surface = RecordingSurface::new(100.0, 100.0);
        let token = particle_loop.start().unwrap();
        assert!(particle_loop.frame(token, 16, &mut surface));
        let before = particle_loop.field().particles()[0];

        particle_loop.stop();
        let mut late = RecordingSurface::new(100.0, 100.0);
        assert!(!particle_loop.frame(token, 32, &mut late));
        assert!(late.commands().is_empty());
        assert_eq!(particle_loop.field().particles()[0], before);
    }

    #[test]
    fn restart_invalidates_old_tokens() {
        let mut particle_loop = running_loop();
        let mut surface = RecordingSurface::new(100.0, 100.0);
        let first = particle_loop.start().unwrap();
        particle_loop.stop();
        let second = particle_loop.start().unwrap();
        assert_ne!(first, second);
        assert!(!particle_loop.frame(first, 0, &mut surface));
        assert!(particle_loop.frame(second, 0, &mut surface));
        assert_eq!(particle_loop.frames_drawn(), 1);
    }

    #[test]
    fn empty_field_never_starts() {
        let mut particle_loop = ParticleLoop::new(ParticleField::from_particles(
            ParticleTuning::default(),
            DEFAULT_ACCENT,
            Vec2::new(100.0, 100.0),
            Vec::new(),
        ));
        assert_eq!(particle_loop.start(), None);
        assert!(!particle_loop.is_running());
    }
}
