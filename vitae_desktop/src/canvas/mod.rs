mod effect_layer;
mod loading_spinner;
mod menu_backdrop;
mod particle_overlay;
mod tilt_card;

pub use effect_layer::EffectLayer;
pub use loading_spinner::{LoadingSpinner, SpinnerState};
pub use menu_backdrop::MenuBackdrop;
pub use particle_overlay::ParticleOverlay;
pub use tilt_card::{project_corners, TiltCardCanvas, TiltCardState};
