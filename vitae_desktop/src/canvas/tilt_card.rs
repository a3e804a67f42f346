use std::f32::consts::PI;
use std::marker::PhantomData;

use iced::advanced::graphics::gradient;
use iced::mouse;
use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke};
use iced::{Color, Point, Rectangle, Size, Theme};
use vitae_core::animation::{TiltAngles, Vec2};

use crate::constants::TILT_PERSPECTIVE;
use crate::theme::PaletteColors;

/// Everything the card needs for one frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct TiltCardState {
    pub angles: TiltAngles,
    pub max_deg: f32,
    /// Card-local pointer while hovered.
    pub pointer: Option<Vec2>,
    /// Shine sweep position in 0..=1 while it runs.
    pub shine: Option<f32>,
    /// Reveal fade.
    pub alpha: f32,
}

/// Card background drawn as a perspective-projected quad so it visibly
/// tilts toward the pointer, with a glare and a shine sweep on top.
pub struct TiltCardCanvas<Message> {
    pub state: TiltCardState,
    pub base_color: Color,
    pub palette: PaletteColors,
    pub _marker: PhantomData<Message>,
}

impl<Message> TiltCardCanvas<Message> {
    pub fn new(state: TiltCardState, base_color: Color, palette: PaletteColors) -> Self {
        Self {
            state,
            base_color,
            palette,
            _marker: PhantomData,
        }
    }
}

/// Projects the card corners for the given rotation. Corners are shrunk
/// slightly so the tipped-forward edge stays inside the widget bounds.
pub fn project_corners(size: Size, angles: TiltAngles) -> [Point; 4] {
    let (hw, hh) = (size.width / 2.0 * 0.96, size.height / 2.0 * 0.96);
    let (rx, ry) = (angles.rotate_x.to_radians(), angles.rotate_y.to_radians());
    let corners = [(-hw, -hh), (hw, -hh), (hw, hh), (-hw, hh)];
    corners.map(|(x, y)| {
        let x1 = x * ry.cos();
        let z1 = -x * ry.sin();
        let y1 = y * rx.cos();
        let z = z1 + y * rx.sin();
        let scale = TILT_PERSPECTIVE / (TILT_PERSPECTIVE - z);
        Point::new(size.width / 2.0 + x1 * scale, size.height / 2.0 + y1 * scale)
    })
}

fn quad(corners: &[Point; 4]) -> Path {
    Path::new(|builder| {
        builder.move_to(corners[0]);
        for corner in &corners[1..] {
            builder.line_to(*corner);
        }
        builder.close();
    })
}

impl<Message> canvas::Program<Message> for TiltCardCanvas<Message> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let alpha = self.state.alpha;
        if alpha <= 0.0 {
            return vec![frame.into_geometry()];
        }

        let hovered = self.state.pointer.is_some();
        let corners = project_corners(bounds.size(), self.state.angles);
        let card_path = quad(&corners);
        frame.fill(
            &card_path,
            Color {
                a: self.base_color.a * alpha,
                ..self.base_color
            },
        );

        let border_color = if hovered {
            Color {
                a: 0.85 * alpha,
                ..self.palette.accent
            }
        } else {
            Color {
                a: 0.15 * alpha,
                ..Color::WHITE
            }
        };
        frame.stroke(
            &card_path,
            Stroke::default()
                .with_color(border_color)
                .with_width(if hovered { 2.0 } else { 1.0 }),
        );

        if hovered {
            let offset = self.state.angles.normalized(self.state.max_deg);
            let center = frame.center();
            let angle = offset.x * 0.5 + PI / 4.0;
            let glare_len = bounds.width * 1.5;
            let cx = center.x + offset.x * bounds.width * 0.2;
            let cy = center.y - offset.y * bounds.height * 0.2;
            let start = Point::new(
                cx + angle.cos() * glare_len * 0.5,
                cy + angle.sin() * glare_len * 0.5,
            );
            let end = Point::new(
                cx - angle.cos() * glare_len * 0.5,
                cy - angle.sin() * glare_len * 0.5,
            );
            let glare = gradient::Linear::new(start, end)
                .add_stop(0.0, Color::TRANSPARENT)
                .add_stop(0.5, Color { a: 0.1, ..Color::WHITE })
                .add_stop(1.0, Color::TRANSPARENT);
            frame.fill(&card_path, glare);
        }

        if let Some(t) = self.state.shine {
            let band = bounds.width * 0.3;
            let x = -band + t * (bounds.width + 2.0 * band);
            let sweep = gradient::Linear::new(Point::new(x - band / 2.0, 0.0), Point::new(x + band / 2.0, 0.0))
                .add_stop(0.0, Color::TRANSPARENT)
                .add_stop(0.5, Color { a: 0.18, ..Color::WHITE })
                .add_stop(1.0, Color::TRANSPARENT);
            frame.fill(&card_path, sweep);
        }

        vec![frame.into_geometry()]
    }
}
