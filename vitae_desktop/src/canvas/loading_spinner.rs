//! Startup loader: a rotating segmented ring that fades out once the
//! engine's loader timer runs down.

use std::f32::consts::PI;

use iced::widget::canvas::{self, Frame, Geometry, Path};
use iced::{Color, Point, Rectangle, Theme};

/// Animation state
#[derive(Debug, Clone, Copy)]
pub struct SpinnerState {
    pub tick: f32,
    pub size: f32,
    pub color: Color,
    /// Overall fade, 1.0 while loading.
    pub alpha: f32,
}

pub struct LoadingSpinner {
    state: SpinnerState,
}

impl LoadingSpinner {
    pub fn new(state: SpinnerState) -> Self {
        Self { state }
    }
}

const SEGMENTS: usize = 12;
const ARC_STEPS: usize = 10;

impl<Message> canvas::Program<Message> for LoadingSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center = frame.center();
        let inner_radius = self.state.size * 0.6;
        let outer_radius = self.state.size * 0.8;
        let rotation = self.state.tick * 2.0;
        let at = |angle: f32, radius: f32| {
            Point::new(
                center.x + angle.cos() * radius,
                center.y + angle.sin() * radius,
            )
        };

        for i in 0..SEGMENTS {
            let start_angle = (i as f32 / SEGMENTS as f32) * 2.0 * PI + rotation;
            let end_angle = ((i + 1) as f32 / SEGMENTS as f32) * 2.0 * PI + rotation;

            let path = Path::new(|builder| {
                builder.move_to(at(start_angle, outer_radius));
                for step in 1..=ARC_STEPS {
                    let t = step as f32 / ARC_STEPS as f32;
                    builder.line_to(at(start_angle + (end_angle - start_angle) * t, outer_radius));
                }
                for step in (0..=ARC_STEPS).rev() {
                    let t = step as f32 / ARC_STEPS as f32;
                    builder.line_to(at(start_angle + (end_angle - start_angle) * t, inner_radius));
                }
                builder.close();
            });

            // Trailing segments fade
            let fade = ((i as f32 + 1.0) / SEGMENTS as f32).powf(2.0);
            frame.fill(
                &path,
                Color {
                    a: (0.3 + fade * 0.7) * self.state.alpha,
                    ..self.state.color
                },
            );
        }

        vec![frame.into_geometry()]
    }
}
