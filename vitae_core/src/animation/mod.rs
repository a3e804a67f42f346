//! Animation engine: particle background and one-shot element effects.

pub mod engine;
pub mod particles;
pub mod ripple;
pub mod runner;
pub mod shine;
pub mod spring;
pub mod surface;
pub mod tilt;
pub mod timeline;
pub mod typewriter;

pub use engine::AnimationEngine;
pub use particles::{OverlayCursor, Particle, ParticleField};
pub use runner::{FrameToken, ParticleLoop};
pub use spring::Spring;
pub use surface::{DrawCommand, RecordingSurface, Rgba, Surface, Vec2};
pub use tilt::TiltAngles;
pub use timeline::{ease_out_cubic, Timeline, Timer};
pub use typewriter::Typewriter;
