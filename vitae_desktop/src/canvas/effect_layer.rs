use std::marker::PhantomData;

use iced::advanced::graphics::gradient;
use iced::mouse;
use iced::widget::canvas::{self, Frame, Geometry, Path};
use iced::{Color, Point, Rectangle, Theme};
use vitae_core::animation::ripple::RippleFrame;

use crate::theme::PaletteColors;

/// Click ripples and the hover shine for a button, drawn underneath it.
pub struct EffectLayer<Message> {
    ripples: Vec<RippleFrame>,
    shine: Option<f32>,
    palette: PaletteColors,
    _marker: PhantomData<Message>,
}

impl<Message> EffectLayer<Message> {
    pub fn new(ripples: Vec<RippleFrame>, shine: Option<f32>, palette: PaletteColors) -> Self {
        Self {
            ripples,
            shine,
            palette,
            _marker: PhantomData,
        }
    }
}

impl<Message> canvas::Program<Message> for EffectLayer<Message> {
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
        let clip = Rectangle::with_size(bounds.size());
        // Ripples grow to the far corner of the element.
        let max_radius = (bounds.width.powi(2) + bounds.height.powi(2)).sqrt();

        frame.with_clip(clip, |frame| {
            for ripple in &self.ripples {
                let circle = Path::circle(
                    Point::new(ripple.origin.x, ripple.origin.y),
                    ripple.spread * max_radius,
                );
                frame.fill(
                    &circle,
                    Color {
                        a: ripple.alpha,
                        ..self.palette.accent
                    },
                );
            }

            if let Some(t) = self.shine {
                let band = bounds.width * 0.35;
                let x = -band + t * (bounds.width + 2.0 * band);
                let sweep = gradient::Linear::new(
                    Point::new(x - band / 2.0, 0.0),
                    Point::new(x + band / 2.0, bounds.height),
                )
                .add_stop(0.0, Color::TRANSPARENT)
                .add_stop(0.5, Color { a: 0.22, ..Color::WHITE })
                .add_stop(1.0, Color::TRANSPARENT);
                frame.fill(&Path::rectangle(Point::ORIGIN, bounds.size()), sweep);
            }
        });

        vec![frame.into_geometry()]
    }
}
