use iced::{theme, Theme};

use super::palette::PaletteColors;

/// Builds the iced theme from a resolved palette.
pub fn app_theme_with_palette(p: PaletteColors) -> Theme {
    Theme::custom(
        "Vitae".to_string(),
        theme::Palette {
            background: p.background,
            text: p.text,
            primary: p.accent,
            success: p.success,
            danger: p.danger,
            ..theme::Palette::DARK
        },
    )
}
