use crate::constants::BUTTON_BORDER_RADIUS;
use crate::theme::PaletteColors;
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme, Vector};

/// Navigation link. `active` marks the current section, `highlighted` the
/// one under the reading line while scrolling.
pub fn nav_link_style(
    palette: PaletteColors,
    active: bool,
    highlighted: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style + Clone {
    move |_, status| {
        let hovered = matches!(status, button::Status::Hovered);
        let text_color = if active || highlighted {
            palette.accent
        } else if hovered {
            palette.text
        } else {
            palette.muted
        };
        let background = if active {
            Some(Background::Color(Color {
                a: 0.18,
                ..palette.accent
            }))
        } else if hovered {
            Some(Background::Color(Color {
                a: 0.5,
                ..palette.surface_raised
            }))
        } else {
            None
        };
        button::Style {
            background,
            text_color,
            border: Border {
                color: if highlighted && !active {
                    Color {
                        a: 0.6,
                        ..palette.accent
                    }
                } else {
                    Color::TRANSPARENT
                },
                width: 1.0,
                radius: BUTTON_BORDER_RADIUS.into(),
            },
            ..button::Style::default()
        }
    }
}

/// Icon button style for the mobile menu toggle.
pub fn icon_button_style(
    palette: PaletteColors,
    is_open: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style + Clone {
    move |_, status| {
        let base = button::Style {
            background: Some(Background::Color(if is_open {
                palette.background
            } else {
                palette.surface_raised
            })),
            text_color: if is_open { palette.text } else { palette.accent },
            border: Border {
                color: if is_open { palette.muted } else { palette.accent },
                width: 1.0,
                radius: 12.0.into(),
            },
            ..button::Style::default()
        };

        match status {
            button::Status::Hovered => button::Style {
                border: Border {
                    color: palette.glow,
                    ..base.border
                },
                shadow: Shadow {
                    color: palette.glow,
                    blur_radius: 8.0,
                    offset: Vector::default(),
                },
                ..base
            },
            _ => base,
        }
    }
}

/// Contact link buttons: transparent so the ripple canvas underneath shows.
pub fn contact_button_style(
    palette: PaletteColors,
    alpha: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style + Clone {
    move |_, status| {
        let border_alpha = match status {
            button::Status::Hovered => 0.9,
            button::Status::Pressed => 1.0,
            _ => 0.4,
        };
        button::Style {
            background: None,
            text_color: Color {
                a: alpha,
                ..palette.text
            },
            border: Border {
                color: Color {
                    a: border_alpha * alpha,
                    ..palette.accent
                },
                width: 1.0,
                radius: BUTTON_BORDER_RADIUS.into(),
            },
            ..button::Style::default()
        }
    }
}

/// Floating round button, bottom right.
pub fn scroll_top_button_style(
    palette: PaletteColors,
) -> impl Fn(&Theme, button::Status) -> button::Style + Clone {
    move |_, status| {
        let shadow = match status {
            button::Status::Hovered => Shadow {
                color: palette.accent,
                offset: Vector::new(0.0, 4.0),
                blur_radius: 12.0,
            },
            _ => Shadow::default(),
        };
        button::Style {
            background: Some(Background::Color(palette.accent)),
            text_color: palette.background,
            border: Border {
                color: palette.accent,
                width: 1.0,
                radius: 22.0.into(),
            },
            shadow,
            ..button::Style::default()
        }
    }
}
