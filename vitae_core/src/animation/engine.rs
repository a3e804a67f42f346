//! The animation engine: particle overlay plus the one-shot effects attached
//! to content elements.

use rand::Rng;
use tracing::{debug, info};

use crate::animation::particles::ParticleField;
use crate::animation::ripple::{RippleFrame, Ripples};
use crate::animation::runner::{FrameToken, ParticleLoop};
use crate::animation::shine::ShineSweeps;
use crate::animation::surface::{RecordingSurface, Surface, Vec2};
use crate::animation::tilt::{TiltAngles, TiltTracker};
use crate::animation::timeline::{ease_out_cubic, Timeline, Timer};
use crate::animation::typewriter::Typewriter;
use crate::bindings::{ElementKey, EngineBindings};
use crate::context::{MotionPreference, SiteContext};
use crate::utils::config::EffectTuning;

/// Duration of the reveal animation played when an element first scrolls into view.
pub const REVEAL_DURATION_MS: u64 = 600;

/// Fade-out of the loading overlay once its display time is over.
const LOADER_FADE_MS: u64 = 300;

pub struct AnimationEngine {
    motion: MotionPreference,
    tuning: EffectTuning,
    particles: Option<ParticleLoop>,
    surface: RecordingSurface,
    reveals: Timeline,
    fills: Timeline,
    typewriter: Option<Typewriter>,
    ripples: Ripples,
    tilt: TiltTracker,
    shine: ShineSweeps,
    loader: Option<Timer>,
    skill_bars: bool,
}

/// Motion preference for one feature: a disabled feature behaves as reduced.
fn gate(motion: MotionPreference, enabled: bool) -> MotionPreference {
    if enabled {
        motion
    } else {
        MotionPreference::Reduced
    }
}

impl AnimationEngine {
    pub fn new<R: Rng + ?Sized>(ctx: &SiteContext, bindings: &EngineBindings, rng: &mut R) -> Self {
        let config = ctx.config();
        let motion = ctx.motion();
        let features = &config.features;
        let tuning = config.effects.clone();

        let particles = match bindings.particle_surface {
            Some(size) if features.particles => {
                Some(ParticleLoop::new(ParticleField::new(ctx, size, rng)))
            }
            Some(_) => {
                info!("particles disabled in configuration");
                None
            }
            None => None,
        };
        let size = bindings.particle_surface.unwrap_or(Vec2::ZERO);

        let typewriter = bindings.typewriter_target.then(|| {
            Typewriter::new(
                config.personal.title.clone(),
                tuning.typewriter_char_ms,
                gate(motion, features.typewriter),
            )
        });

        let loader = (bindings.loader && features.loader && !motion.is_reduced()).then_some(Timer {
            start_ms: 0,
            duration_ms: tuning.loader_ms,
        });

        if motion.is_reduced() {
            info!("reduced motion: decorative animation disabled");
        }

        Self {
            motion,
            particles,
            surface: RecordingSurface::new(size.x, size.y),
            reveals: Timeline::new(motion),
            fills: Timeline::new(gate(motion, bindings.skill_bars)),
            typewriter,
            ripples: Ripples::new(tuning.ripple_ms, gate(motion, features.ripple)),
            tilt: TiltTracker::new(tuning.tilt_max_deg, gate(motion, features.tilt)),
            shine: ShineSweeps::new(tuning.shine_ms, gate(motion, features.shine)),
            loader,
            skill_bars: bindings.skill_bars,
            tuning,
        }
    }

    /// Starts the page-load effects and the particle loop.
    pub fn start(&mut self, now_ms: u64) -> Option<FrameToken> {
        if let Some(loader) = &mut self.loader {
            loader.start_ms = now_ms;
        }
        let typing_at = self.loader.map(|l| l.end_ms()).unwrap_or(now_ms);
        if let Some(typewriter) = &mut self.typewriter {
            typewriter.start(typing_at);
        }
        self.particles.as_mut().and_then(ParticleLoop::start)
    }

    pub fn stop(&mut self) {
        if let Some(particles) = &mut self.particles {
            particles.stop();
        }
    }

    pub fn particle_token(&self) -> Option<FrameToken> {
        self.particles.as_ref().and_then(ParticleLoop::token)
    }

    /// Renders one particle frame into the engine's surface.
    pub fn particle_frame(&mut self, token: FrameToken, now_ms: u64) -> bool {
        match &mut self.particles {
            Some(particles) => particles.frame(token, now_ms, &mut self.surface),
            None => false,
        }
    }

    pub fn surface(&self) -> &RecordingSurface {
        &self.surface
    }

    pub fn particles(&self) -> Option<&ParticleLoop> {
        self.particles.as_ref()
    }

    pub fn resize(&mut self, size: Vec2) {
        self.surface.resize(size.x, size.y);
        if let Some(particles) = &mut self.particles {
            particles.field_mut().resize(size);
        }
    }

    pub fn set_pointer(&mut self, pointer: Option<Vec2>) {
        if let Some(particles) = &mut self.particles {
            particles.field_mut().set_pointer(pointer);
        }
    }

    /// Plays the one-shot reveal for an element that just became visible.
    pub fn play_reveal(&mut self, key: ElementKey, now_ms: u64) {
        if self.reveals.schedule(key.clone(), now_ms, REVEAL_DURATION_MS) {
            debug!(element = %key, "reveal scheduled");
        }
    }

    /// Eased reveal progress; elements never revealed read as fully shown.
    pub fn reveal_progress(&self, key: &ElementKey, now_ms: u64) -> f32 {
        self.reveals.eased_or_done(key, now_ms)
    }

    pub fn fill_skill(&mut self, key: ElementKey, now_ms: u64) {
        if !self.fills.contains(&key) {
            self.fills.schedule(key, now_ms, self.tuning.skill_fill_ms);
        }
    }

    /// Displayed width of a skill bar whose target is `level` (0..=1).
    pub fn skill_fill(&self, key: &ElementKey, level: f32, now_ms: u64) -> f32 {
        if !self.skill_bars {
            return level;
        }
        match self.fills.progress(key, now_ms) {
            Some(t) => level * ease_out_cubic(t),
            None => 0.0,
        }
    }

    pub fn ripple(&mut self, key: ElementKey, origin: Vec2, now_ms: u64) {
        self.ripples.trigger(key, origin, now_ms);
    }

    pub fn ripples<'a>(&'a self, key: &'a ElementKey, now_ms: u64) -> impl Iterator<Item = RippleFrame> + 'a {
        self.ripples.frames(key, now_ms)
    }

    /// Pointer entered a control: start its shine sweep.
    pub fn hover_enter(&mut self, key: ElementKey, now_ms: u64) {
        self.shine.trigger(key, now_ms);
    }

    pub fn hover_move(&mut self, key: ElementKey, pointer: Vec2, size: Vec2) {
        self.tilt.pointer_moved(key, pointer, size);
    }

    pub fn hover_leave(&mut self, key: &ElementKey) {
        self.tilt.pointer_left(key);
    }

    pub fn tilt(&self, key: &ElementKey) -> TiltAngles {
        self.tilt.angles(key)
    }

    pub fn tilt_pointer(&self, key: &ElementKey) -> Option<Vec2> {
        self.tilt.pointer(key)
    }

    pub fn tilt_max_deg(&self) -> f32 {
        self.tilt.max_deg()
    }

    pub fn shine(&self, key: &ElementKey, now_ms: u64) -> Option<f32> {
        self.shine.position(key, now_ms)
    }

    /// Typed prefix of the profile title.
    pub fn typed_title(&self, now_ms: u64) -> Option<&str> {
        self.typewriter.as_ref().map(|t| t.visible_text(now_ms))
    }

    pub fn is_typing(&self, now_ms: u64) -> bool {
        self.typewriter.as_ref().is_some_and(|t| t.is_typing(now_ms))
    }

    /// Loader overlay opacity; 0 once it has faded out.
    pub fn loader_alpha(&self, now_ms: u64) -> f32 {
        let Some(loader) = self.loader else {
            return 0.0;
        };
        if !loader.is_finished(now_ms) {
            return 1.0;
        }
        let fade = Timer {
            start_ms: loader.end_ms(),
            duration_ms: LOADER_FADE_MS,
        };
        1.0 - fade.progress(now_ms)
    }

    /// Advances per-frame effect state. Returns true while anything besides
    /// the particle loop still needs redraws.
    pub fn update(&mut self, now_ms: u64) -> bool {
        let typing = self
            .typewriter
            .as_mut()
            .is_some_and(|t| t.update(now_ms));
        let rippling = self.ripples.update(now_ms);
        let shining = self.shine.update(now_ms);

        typing
            || rippling
            || shining
            || self.reveals.is_animating(now_ms)
            || self.fills.is_animating(now_ms)
            || self.loader_alpha(now_ms) > 0.0
    }

    /// One-shot timers scheduled so far, across reveals and skill fills.
    pub fn scheduled_timers(&self) -> usize {
        self.reveals.scheduled_total() + self.fills.scheduled_total()
    }

    pub fn motion(&self) -> MotionPreference {
        self.motion
    }

    /// Stops the loop and drops the particle field.
    pub fn destroy(&mut self) {
        if let Some(particles) = &mut self.particles {
            particles.destroy();
        }
        self.surface.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindings::ViewBindings;
    use crate::utils::config::Config;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn engine(motion: MotionPreference) -> AnimationEngine {
        let ctx = SiteContext::new(Config::bundled().unwrap(), motion);
        let bindings = ViewBindings::new()
            .with_particle_surface(Some(Vec2::new(1200.0, 800.0)))
            .with_loader(true)
            .with_typewriter_target(true)
            .with_skill_bars(true)
            .engine();
        AnimationEngine::new(&ctx, &bindings, &mut StdRng::seed_from_u64(1))
    }

    #[test]
    fn full_motion_runs_everything() {
        let mut engine = engine(MotionPreference::Full);
        let token = engine.start(0).unwrap();
        assert!(engine.particle_frame(token, 16));
        assert!(engine.surface().circles().count() > 0);
        assert_eq!(engine.loader_alpha(100), 1.0);
        assert_eq!(engine.typed_title(0), Some(""));
    }

    #[test]
    fn reduced_motion_schedules_no_timers() {
        let mut engine = engine(MotionPreference::Reduced);
        assert_eq!(engine.start(0), None);
        engine.play_reveal(ElementKey::child("experiencia", 0), 0);
        engine.fill_skill(ElementKey::child("habilidades", 0), 0);
        engine.ripple(ElementKey::named("b"), Vec2::ZERO, 0);
        assert_eq!(engine.scheduled_timers(), 0);
        assert_eq!(engine.loader_alpha(0), 0.0);
        assert_eq!(engine.skill_fill(&ElementKey::child("habilidades", 0), 0.8, 0), 0.8);
        assert_eq!(engine.typed_title(0).map(str::len), Some(engine_title_len()));
        assert!(!engine.update(0));
    }

    fn engine_title_len() -> usize {
        Config::bundled().unwrap().personal.title.len()
    }

    #[test]
    fn skill_bar_fills_once() {
        let mut engine = engine(MotionPreference::Full);
        let key = ElementKey::child("habilidades", 1);
        assert_eq!(engine.skill_fill(&key, 0.9, 0), 0.0);
        engine.fill_skill(key.clone(), 100);
        engine.fill_skill(key.clone(), 500);
        assert_eq!(engine.scheduled_timers(), 1);
        assert!((engine.skill_fill(&key, 0.9, 100 + 1200) - 0.9).abs() < 1e-6);
    }

    #[test]
    fn destroy_stops_particles() {
        let mut engine = engine(MotionPreference::Full);
        let token = engine.start(0).unwrap();
        assert!(engine.particle_frame(token, 16));
        assert!(!engine.surface().commands().is_empty());
        engine.destroy();
        assert!(engine.surface().commands().is_empty());
        assert!(!engine.particle_frame(token, 16));
        assert!(engine.particles().unwrap().field().is_empty());
    }
}
