//! Vitae Desktop - animated résumé viewer built with Iced.

pub mod canvas;
pub mod cli;
pub mod constants;
pub mod icons;
pub mod layout;
pub mod message;
pub mod styles;
pub mod theme;
pub mod views;

pub use cli::Args;
pub use constants::*;
pub use layout::PageLayout;
pub use message::Message;
pub use theme::{app_theme_with_palette, palette_for, resolve_mode, PaletteColors, ThemeMode};
