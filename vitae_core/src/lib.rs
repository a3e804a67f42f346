//! Core of the Vitae résumé viewer.
//!
//! Everything here is host-agnostic: time is an explicit millisecond clock
//! and drawing goes through [`animation::Surface`], so the same page logic
//! runs under the desktop host and under test.

pub mod animation;
pub mod bindings;
pub mod content;
pub mod context;
pub mod navigation;
pub mod prelude;
pub mod site;
pub mod utils;

pub use site::{Site, SiteEvent};
