//! Navigation controller and the pieces it coordinates.

pub mod controller;
pub mod location;
pub mod menu;
pub mod reveal;
pub mod scroll_spy;
pub mod section;

pub use controller::{
    KeyModifiers, NavKey, NavigationCause, NavigationController, NavigationEvent,
    NavigationOutcome, Transition,
};
pub use location::{Location, MemoryLocation};
pub use reveal::{visible_ratio, ElementSpan, RevealClass, RevealTracker};
pub use scroll_spy::SectionBounds;
pub use section::{Section, SectionSet};
