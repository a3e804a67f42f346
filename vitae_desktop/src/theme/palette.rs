use iced::Color;
use vitae_core::animation::Rgba;
use vitae_core::utils::config::ThemeTokens;

/// Base palette selected with `--theme` or the `theme.mode` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
    Black,
}

impl ThemeMode {
    pub fn name(&self) -> &'static str {
        match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
            ThemeMode::Black => "Black",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            "black" => Some(ThemeMode::Black),
            _ => None,
        }
    }
}

/// Colors every view and canvas program draws with.
#[derive(Debug, Clone, Copy)]
pub struct PaletteColors {
    pub background: Color,
    pub surface: Color,
    pub surface_raised: Color,
    pub border: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub accent_soft: Color,
    pub success: Color,
    pub danger: Color,
    pub glow: Color,
}

impl Default for PaletteColors {
    fn default() -> Self {
        Self::dark()
    }
}

impl PaletteColors {
    pub fn light() -> Self {
        Self {
            background: Color::from_rgb8(247, 246, 252),
            surface: Color::from_rgb8(238, 236, 248),
            surface_raised: Color::from_rgb8(255, 255, 255),
            border: Color::from_rgb8(208, 202, 228),
            text: Color::from_rgb8(28, 22, 44),
            muted: Color::from_rgb8(112, 104, 138),
            accent: Color::from_rgb8(132, 40, 210),
            accent_soft: Color::from_rgb8(190, 150, 240),
            success: Color::from_rgb8(40, 160, 80),
            danger: Color::from_rgb8(210, 60, 60),
            glow: Color::from_rgb8(160, 90, 240),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::from_rgb8(10, 8, 14),
            surface: Color::from_rgb8(18, 14, 24),
            surface_raised: Color::from_rgb8(26, 20, 34),
            border: Color::from_rgb8(50, 40, 70),
            text: Color::from_rgb8(240, 235, 255),
            muted: Color::from_rgb8(150, 140, 180),
            accent: Color::from_rgb8(180, 50, 255),
            accent_soft: Color::from_rgb8(140, 40, 200),
            success: Color::from_rgb8(100, 255, 140),
            danger: Color::from_rgb8(255, 100, 100),
            glow: Color::from_rgb8(200, 100, 255),
        }
    }

    /// Darker than dark; pure black page.
    pub fn black() -> Self {
        Self {
            background: Color::from_rgb8(0, 0, 0),
            surface: Color::from_rgb8(6, 5, 9),
            surface_raised: Color::from_rgb8(12, 10, 17),
            border: Color::from_rgb8(28, 22, 38),
            text: Color::from_rgb8(250, 245, 255),
            muted: Color::from_rgb8(140, 130, 170),
            accent: Color::from_rgb8(200, 80, 255),
            accent_soft: Color::from_rgb8(160, 60, 220),
            success: Color::from_rgb8(120, 255, 150),
            danger: Color::from_rgb8(255, 110, 110),
            glow: Color::from_rgb8(220, 120, 255),
        }
    }

    pub fn from_theme_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Black => Self::black(),
        }
    }

    /// Applies the résumé's color tokens on top of the base palette.
    /// Tokens that fail to parse leave the base color in place.
    pub fn with_tokens(mut self, tokens: &ThemeTokens) -> Self {
        if let Some(accent) = tokens.accent_color() {
            self.accent = to_color(accent);
            self.glow = mix(self.accent, Color::WHITE, 0.25);
            self.accent_soft = mix(self.accent, self.background, 0.3);
        }
        if let Some(background) = tokens.background_color() {
            self.background = to_color(background);
        }
        if let Some(surface) = tokens.surface_color() {
            self.surface = to_color(surface);
            self.surface_raised = mix(self.surface, self.text, 0.05);
        }
        if let Some(text) = tokens.text_color() {
            self.text = to_color(text);
        }
        self
    }
}

/// Mode from the command line first, then the résumé's `theme.mode`.
pub fn resolve_mode(cli: Option<ThemeMode>, tokens: &ThemeTokens) -> ThemeMode {
    cli.or_else(|| tokens.mode.as_deref().and_then(ThemeMode::from_name))
        .unwrap_or_default()
}

/// Palette for `mode` with the résumé's tokens applied.
pub fn palette_for(mode: ThemeMode, tokens: &ThemeTokens) -> PaletteColors {
    PaletteColors::from_theme_mode(mode).with_tokens(tokens)
}

pub fn to_color(rgba: Rgba) -> Color {
    Color::from_rgba(rgba.r, rgba.g, rgba.b, rgba.a)
}

fn mix(a: Color, b: Color, t: f32) -> Color {
    Color {
        r: a.r + (b.r - a.r) * t,
        g: a.g + (b.g - a.g) * t,
        b: a.b + (b.b - a.b) * t,
        a: a.a,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn mode_names_are_case_insensitive() {
        assert_eq!(ThemeMode::from_name("LIGHT"), Some(ThemeMode::Light));
        assert_eq!(ThemeMode::from_name("black"), Some(ThemeMode::Black));
        assert_eq!(ThemeMode::from_name("sepia"), None);
    }

    #[test]
    fn cli_mode_beats_token() {
        let tokens = ThemeTokens {
            mode: Some("light".into()),
            ..Default::default()
        };
        assert_eq!(resolve_mode(Some(ThemeMode::Black), &tokens), ThemeMode::Black);
        assert_eq!(resolve_mode(None, &tokens), ThemeMode::Light);
        assert_eq!(resolve_mode(None, &ThemeTokens::default()), ThemeMode::Dark);
    }

    #[test]
    fn accent_token_overrides_base() {
        let tokens = ThemeTokens {
            accent: Some("#00ff00".into()),
            ..Default::default()
        };
        let palette = palette_for(ThemeMode::Dark, &tokens);
        assert_eq!(palette.accent, Color::from_rgb(0.0, 1.0, 0.0));
        assert_eq!(palette.background, PaletteColors::dark().background);
    }

    #[test]
    fn bad_token_keeps_base_color() {
        let tokens = ThemeTokens {
            text: Some("not-a-color".into()),
            ..Default::default()
        };
        assert_eq!(
            palette_for(ThemeMode::Light, &tokens).text,
            PaletteColors::light().text
        );
    }
}
