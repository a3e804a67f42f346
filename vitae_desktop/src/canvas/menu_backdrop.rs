use std::marker::PhantomData;

use iced::advanced::graphics::gradient;
use iced::mouse;
use iced::widget::canvas::{self, Frame, Geometry, Path};
use iced::{Color, Point, Rectangle, Size, Theme};
use vitae_core::animation::ease_out_cubic;

use crate::theme::PaletteColors;

/// Backdrop behind the mobile menu. Slides down from under the nav bar as
/// the menu spring opens.
pub struct MenuBackdrop<Message> {
    progress: f32,
    palette: PaletteColors,
    _marker: PhantomData<Message>,
}

impl<Message> MenuBackdrop<Message> {
    pub fn new(progress: f32, palette: PaletteColors) -> Self {
        Self {
            progress,
            palette,
            _marker: PhantomData,
        }
    }
}

impl<Message> canvas::Program<Message> for MenuBackdrop<Message> {
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
        if self.progress < 0.01 {
            return vec![frame.into_geometry()];
        }

        let eased = ease_out_cubic(self.progress.min(1.0));
        let height = bounds.height * eased;
        frame.fill(
            &Path::rectangle(Point::ORIGIN, Size::new(bounds.width, height)),
            Color {
                a: 0.96 * eased,
                ..self.palette.surface
            },
        );

        // Accent edge fading into the page
        let edge = gradient::Linear::new(Point::new(0.0, height - 6.0), Point::new(0.0, height))
            .add_stop(0.0, Color::TRANSPARENT)
            .add_stop(
                1.0,
                Color {
                    a: 0.6 * eased,
                    ..self.palette.accent
                },
            );
        frame.fill(
            &Path::rectangle(Point::new(0.0, height - 6.0), Size::new(bounds.width, 6.0)),
            edge,
        );

        vec![frame.into_geometry()]
    }
}
