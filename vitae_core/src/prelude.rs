//! Prelude module for Vitae
//!
//! Re-exports the types a host needs to wire up a page.
//!
//! # Usage
//!
//! ```rust
//! use vitae_core::prelude::*;
//! ```

// Error handling
pub use crate::utils::error::{ResultExt, VitaeError, VitaeResult};

// Configuration
pub use crate::utils::config::{Config, SectionKind};

// Composition root
pub use crate::bindings::{ElementKey, ViewBindings};
pub use crate::context::{MotionPreference, SiteContext};
pub use crate::site::{Site, SiteEvent};

// Navigation and animation
pub use crate::animation::{FrameToken, Rgba, Surface, Vec2};
pub use crate::navigation::{
    ElementSpan, KeyModifiers, MemoryLocation, NavKey, RevealClass, SectionBounds,
};
