use std::marker::PhantomData;

use iced::mouse;
use iced::widget::canvas::{self, Cache, Geometry, Path, Stroke};
use iced::{Point, Rectangle, Theme};
use vitae_core::animation::{DrawCommand, OverlayCursor, RecordingSurface};

use crate::theme::to_color;

/// Replays the particle engine's recorded frame. The cache is owned by the
/// app and cleared whenever a new frame is recorded.
pub struct ParticleOverlay<'a, Message> {
    surface: &'a RecordingSurface,
    cache: &'a Cache,
    cursor: OverlayCursor,
    _marker: PhantomData<Message>,
}

impl<'a, Message> ParticleOverlay<'a, Message> {
    pub fn new(surface: &'a RecordingSurface, cache: &'a Cache, cursor: OverlayCursor) -> Self {
        Self {
            surface,
            cache,
            cursor,
            _marker: PhantomData,
        }
    }
}

impl<'a, Message> canvas::Program<Message> for ParticleOverlay<'a, Message> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let particles = self.cache.draw(renderer, bounds.size(), |frame| {
            for command in self.surface.commands() {
                match command {
                    DrawCommand::Clear => {}
                    DrawCommand::Circle {
                        center,
                        radius,
                        color,
                    } => {
                        let dot = Path::circle(Point::new(center.x, center.y), *radius);
                        frame.fill(&dot, to_color(*color));
                    }
                    DrawCommand::Line {
                        from,
                        to,
                        width,
                        color,
                    } => {
                        let link = Path::line(Point::new(from.x, from.y), Point::new(to.x, to.y));
                        frame.stroke(
                            &link,
                            Stroke::default()
                                .with_color(to_color(*color))
                                .with_width(*width),
                        );
                    }
                }
            }
        });
        vec![particles]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        match self.cursor {
            OverlayCursor::Crosshair if cursor.is_over(bounds) => mouse::Interaction::Crosshair,
            _ => mouse::Interaction::default(),
        }
    }
}
