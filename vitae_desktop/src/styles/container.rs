use crate::constants::CARD_BORDER_RADIUS;
use crate::theme::PaletteColors;
use iced::widget::container;
use iced::{Background, Border, Color, Shadow, Theme, Vector};

/// Content card. `alpha` carries the reveal/entry fade.
pub fn card_style(palette: PaletteColors, alpha: f32) -> impl Fn(&Theme) -> container::Style + Clone {
    move |_| container::Style {
        background: Some(Background::Color(Color {
            a: 0.72 * alpha,
            ..palette.surface_raised
        })),
        text_color: Some(Color {
            a: alpha,
            ..palette.text
        }),
        border: Border {
            color: Color {
                a: 0.6 * alpha,
                ..palette.border
            },
            width: 1.0,
            radius: CARD_BORDER_RADIUS.into(),
        },
        ..Default::default()
    }
}

/// Section header strip; the active one glows.
pub fn section_header_style(
    palette: PaletteColors,
    active: bool,
) -> impl Fn(&Theme) -> container::Style + Clone {
    move |_| container::Style {
        background: Some(Background::Color(Color {
            a: if active { 0.9 } else { 0.6 },
            ..palette.surface
        })),
        text_color: Some(if active { palette.accent } else { palette.text }),
        border: Border {
            color: if active { palette.accent } else { palette.border },
            width: 1.0,
            radius: CARD_BORDER_RADIUS.into(),
        },
        shadow: if active {
            Shadow {
                color: Color {
                    a: 0.35,
                    ..palette.glow
                },
                offset: Vector::default(),
                blur_radius: 14.0,
            }
        } else {
            Shadow::default()
        },
        ..Default::default()
    }
}

pub fn nav_bar_style(palette: PaletteColors) -> impl Fn(&Theme) -> container::Style + Clone {
    move |_| container::Style {
        background: Some(Background::Color(Color {
            a: 0.92,
            ..palette.background
        })),
        border: Border {
            color: palette.border,
            width: 1.0,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

/// Live-region line under the nav bar; red when startup fell back.
pub fn status_style(palette: PaletteColors, is_error: bool) -> impl Fn(&Theme) -> container::Style + Clone {
    move |_| container::Style {
        background: Some(Background::Color(Color {
            a: 0.85,
            ..palette.surface
        })),
        text_color: Some(if is_error { palette.danger } else { palette.muted }),
        ..Default::default()
    }
}

/// Round initials avatar used when no profile image loads.
pub fn avatar_style(palette: PaletteColors) -> impl Fn(&Theme) -> container::Style + Clone {
    move |_| container::Style {
        background: Some(Background::Color(palette.accent_soft)),
        text_color: Some(palette.text),
        border: Border {
            color: palette.accent,
            width: 2.0,
            radius: 48.0.into(),
        },
        ..Default::default()
    }
}

pub fn transparent_style() -> impl Fn(&Theme) -> container::Style + Clone {
    move |_| container::Style {
        background: None,
        ..Default::default()
    }
}

pub fn page_style(palette: PaletteColors) -> impl Fn(&Theme) -> container::Style + Clone {
    move |_| container::Style {
        background: Some(Background::Color(palette.background)),
        ..Default::default()
    }
}

/// Skill bar track and fill; `filled` picks the accent half.
pub fn skill_bar_style(
    palette: PaletteColors,
    filled: bool,
    alpha: f32,
) -> impl Fn(&Theme) -> container::Style + Clone {
    move |_| container::Style {
        background: Some(Background::Color(if filled {
            Color {
                a: alpha,
                ..palette.accent
            }
        } else {
            Color {
                a: 0.5 * alpha,
                ..palette.border
            }
        })),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 4.0.into(),
        },
        ..Default::default()
    }
}
