mod app_theme;
mod palette;

pub use app_theme::app_theme_with_palette;
pub use palette::{palette_for, resolve_mode, to_color, PaletteColors, ThemeMode};
