//! Particle background simulation.
//!
//! A fixed set of particles drifts across the overlay, bounces off its edges,
//! leans toward the pointer and is linked to close neighbours with faint lines.
//! The field never owns a clock: the host drives it one tick per frame.

use rand::Rng;
use tracing::debug;

use crate::animation::surface::{Rgba, Surface, Vec2};
use crate::context::SiteContext;
use crate::utils::config::ParticleTuning;

/// Accent used when the theme does not override it (#b432ff).
pub const DEFAULT_ACCENT: Rgba = Rgba::new(180.0 / 255.0, 50.0 / 255.0, 1.0, 1.0);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub opacity: f32,
    pub color: Rgba,
}

impl Particle {
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}

/// Cursor shown over the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayCursor {
    #[default]
    Default,
    Crosshair,
}

/// Number of particles for a viewport width.
pub fn particle_count(width: f32, tuning: &ParticleTuning) -> usize {
    if width <= 0.0 || tuning.divisor <= 0.0 {
        return 0;
    }
    ((width / tuning.divisor) as usize).min(tuning.cap)
}

/// Opacity of the link between two particles `distance` apart, if linked.
pub fn link_alpha(distance: f32, tuning: &ParticleTuning) -> Option<f32> {
    if distance >= tuning.link_distance {
        return None;
    }
    Some((tuning.link_distance - distance) / tuning.link_distance * tuning.link_opacity)
}

#[derive(Debug, Clone)]
pub struct ParticleField {
    tuning: ParticleTuning,
    accent: Rgba,
    bounds: Vec2,
    particles: Vec<Particle>,
    pointer: Option<Vec2>,
    cursor: OverlayCursor,
    destroyed: bool,
}

impl ParticleField {
    /// Seeds the field for a `size` viewport. Reduced motion or a disabled
    /// feature yields an empty field that never draws.
    pub fn new<R: Rng + ?Sized>(ctx: &SiteContext, size: Vec2, rng: &mut R) -> Self {
        let config = ctx.config();
        let tuning = config.particles.clone();
        let accent = config.theme.accent_color().unwrap_or(DEFAULT_ACCENT);

        let enabled = config.features.particles && !ctx.motion().is_reduced();
        let count = if enabled && size.y > 0.0 {
            particle_count(size.x, &tuning)
        } else {
            0
        };

        let particles = (0..count)
            .map(|_| spawn(rng, size, &tuning, accent))
            .collect::<Vec<_>>();
        debug!(count = particles.len(), width = size.x, height = size.y, "particle field seeded");

        Self::from_particles(tuning, accent, size, particles)
    }

    /// Builds a field from explicit particles.
    pub fn from_particles(
        tuning: ParticleTuning,
        accent: Rgba,
        bounds: Vec2,
        particles: Vec<Particle>,
    ) -> Self {
        Self {
            tuning,
            accent,
            bounds,
            particles,
            pointer: None,
            cursor: OverlayCursor::Default,
            destroyed: false,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    pub fn tuning(&self) -> &ParticleTuning {
        &self.tuning
    }

    pub fn cursor(&self) -> OverlayCursor {
        self.cursor
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Last known pointer position; `None` when the pointer left the window.
    pub fn set_pointer(&mut self, pointer: Option<Vec2>) {
        if self.destroyed {
            return;
        }
        self.pointer = pointer;
        self.cursor = if pointer.is_some() && !self.particles.is_empty() {
            OverlayCursor::Crosshair
        } else {
            OverlayCursor::Default
        };
    }

    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    /// Updates the bounds. Existing particles are kept where they are.
    pub fn resize(&mut self, size: Vec2) {
        if self.destroyed {
            return;
        }
        self.bounds = size;
    }

    /// Advances every particle one step and redraws the field.
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        if self.destroyed {
            return;
        }
        surface.clear();
        self.step();
        self.draw(surface);
    }

    /// Physics only: integrate, reflect, attract, cap.
    pub fn step(&mut self) {
        let bounds = self.bounds;
        let pointer = self.pointer;
        let tuning = &self.tuning;

        for particle in &mut self.particles {
            let previous = particle.position;
            particle.position = particle.position + particle.velocity;

            reflect_axis(
                &mut particle.position.x,
                &mut particle.velocity.x,
                previous.x,
                bounds.x,
            );
            reflect_axis(
                &mut particle.position.y,
                &mut particle.velocity.y,
                previous.y,
                bounds.y,
            );

            if let Some(pointer) = pointer {
                let offset = pointer - particle.position;
                let distance = offset.length();
                if distance > 0.0 && distance < tuning.pointer_radius {
                    let force = (tuning.pointer_radius - distance) / tuning.pointer_radius;
                    particle.velocity =
                        particle.velocity + offset * (1.0 / distance) * (force * tuning.attraction);
                }
            }

            let speed = particle.velocity.length();
            if speed > tuning.max_speed {
                particle.velocity = particle.velocity * (tuning.max_speed / speed);
            }
        }
    }

    fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        for particle in &self.particles {
            surface.fill_circle(
                particle.position,
                particle.radius,
                particle.color.with_alpha(particle.opacity),
            );
        }

        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let distance = a.position.distance(b.position);
                if let Some(alpha) = link_alpha(distance, &self.tuning) {
                    surface.stroke_line(
                        a.position,
                        b.position,
                        self.tuning.link_width,
                        self.accent.with_alpha(alpha),
                    );
                }
            }
        }
    }

    /// Drops every particle and releases the pointer. Further ticks are no-ops.
    pub fn destroy(&mut self) {
        self.particles.clear();
        self.particles.shrink_to_fit();
        self.pointer = None;
        self.cursor = OverlayCursor::Default;
        self.destroyed = true;
        debug!("particle field destroyed");
    }
}

fn spawn<R: Rng + ?Sized>(rng: &mut R, size: Vec2, tuning: &ParticleTuning, accent: Rgba) -> Particle {
    let speed = tuning.initial_speed.abs();
    Particle {
        position: Vec2::new(rng.gen_range(0.0..=size.x), rng.gen_range(0.0..=size.y)),
        velocity: Vec2::new(rng.gen_range(-speed..=speed), rng.gen_range(-speed..=speed)),
        radius: rng.gen_range(tuning.radius_min..=tuning.radius_max),
        opacity: rng.gen_range(tuning.opacity_min..=tuning.opacity_max),
        color: accent,
    }
}

/// Inverts the velocity of a particle that is past an edge and still moving
/// away from it. When it crossed the edge during this step the overshoot is
/// folded back inside.
fn reflect_axis(position: &mut f32, velocity: &mut f32, previous: f32, extent: f32) {
    let heading_out = (*position < 0.0 && *velocity < 0.0) || (*position > extent && *velocity > 0.0);
    if !heading_out {
        return;
    }
    *velocity = -*velocity;

    if (0.0..=extent).contains(&previous) {
        *position = if *position < 0.0 {
            -*position
        } else {
            2.0 * extent - *position
        };
        // step longer than the viewport itself
        *position = position.clamp(0.0, extent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::MotionPreference;
    use crate::utils::config::Config;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn particle(x: f32, y: f32, vx: f32, vy: f32) -> Particle {
        Particle {
            position: Vec2::new(x, y),
            velocity: Vec2::new(vx, vy),
            radius: 2.0,
            opacity: 0.3,
            color: DEFAULT_ACCENT,
        }
    }

    fn field(particles: Vec<Particle>) -> ParticleField {
        ParticleField::from_particles(
            ParticleTuning::default(),
            DEFAULT_ACCENT,
            Vec2::new(100.0, 100.0),
            particles,
        )
    }

    #[test]
    fn count_is_capped() {
        let tuning = ParticleTuning::default();
        assert_eq!(particle_count(1200.0, &tuning), 80);
        assert_eq!(particle_count(600.0, &tuning), 40);
        assert_eq!(particle_count(0.0, &tuning), 0);
    }

    #[test]
    fn seeded_particles_start_in_viewport() {
        let ctx = SiteContext::new(Config::bundled().unwrap(), MotionPreference::Full);
        let mut rng = StdRng::seed_from_u64(7);
        let field = ParticleField::new(&ctx, Vec2::new(900.0, 600.0), &mut rng);
        assert_eq!(field.len(), 60);
        for p in field.particles() {
            assert!((0.0..=900.0).contains(&p.position.x));
            assert!((0.0..=600.0).contains(&p.position.y));
            assert!(p.speed() <= 0.5 * std::f32::consts::SQRT_2 + 1e-6);
        }
    }

    #[test]
    fn reduced_motion_seeds_nothing() {
        let ctx = SiteContext::new(Config::bundled().unwrap(), MotionPreference::Reduced);
        let mut rng = StdRng::seed_from_u64(7);
        let field = ParticleField::new(&ctx, Vec2::new(1200.0, 800.0), &mut rng);
        assert!(field.is_empty());
    }

    #[test]
    fn bounces_off_right_edge() {
        let mut field = field(vec![particle(99.5, 50.0, 1.0, 0.0)]);
        field.step();
        let p = field.particles()[0];
        assert!(p.velocity.x < 0.0);
        assert!(p.position.x <= 100.0);
    }

    #[test]
    fn inward_heading_particle_is_left_alone() {
        let mut field = field(vec![particle(120.0, 50.0, -1.0, 0.0)]);
        field.step();
        assert_eq!(field.particles()[0].velocity.x, -1.0);
    }

    #[test]
    fn pointer_pulls_particle_closer() {
        let mut field = field(vec![particle(50.0, 50.0, 0.0, 0.0)]);
        field.set_pointer(Some(Vec2::new(80.0, 50.0)));
        assert_eq!(field.cursor(), OverlayCursor::Crosshair);
        field.step();
        let v = field.particles()[0].velocity;
        let expected = (150.0 - 30.0) / 150.0 * 0.03;
        assert!((v.x - expected).abs() < 1e-6);
        assert_eq!(v.y, 0.0);
    }

    #[test]
    fn speed_is_capped() {
        let mut field = field(vec![particle(50.0, 50.0, 30.0, -40.0)]);
        field.step();
        assert!((field.particles()[0].speed() - 2.0).abs() < 1e-4);
    }

    #[test]
    fn destroy_stops_drawing() {
        let mut field = field(vec![particle(50.0, 50.0, 0.0, 0.0)]);
        field.set_pointer(Some(Vec2::new(1.0, 1.0)));
        field.destroy();
        assert!(field.is_empty());
        assert_eq!(field.cursor(), OverlayCursor::Default);

        let mut surface = crate::animation::RecordingSurface::new(100.0, 100.0);
        field.tick(&mut surface);
        assert!(surface.commands().is_empty());
    }
}
