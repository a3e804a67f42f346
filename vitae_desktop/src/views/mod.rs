//! View builders. Everything here is a pure function of the site state and
//! the clock; the app only decides which layers to stack.

mod nav;
mod sections;

pub use nav::{mobile_menu, nav_bar};
pub use sections::page;

use chrono::NaiveDate;
use iced::widget::image;
use iced::Padding;
use vitae_core::animation::Vec2;
use vitae_core::bindings::ElementKey;
use vitae_core::navigation::RevealClass;
use vitae_core::Site;

use crate::constants::{REVEAL_SHIFT, ZOOM_INSET};
use crate::layout::PageLayout;
use crate::theme::PaletteColors;

/// Borrowed state one frame of the page is built from.
pub struct PageView<'a> {
    pub site: &'a Site,
    pub layout: &'a PageLayout,
    pub palette: PaletteColors,
    pub now_ms: u64,
    pub today: NaiveDate,
    pub photo: Option<&'a image::Handle>,
    /// Size of the scrollable page area.
    pub viewport: Vec2,
}

impl<'a> PageView<'a> {
    /// How far an element has entered, combining the section-entry stagger
    /// with its scroll reveal. Unrevealed elements stay hidden.
    pub fn amount(&self, key: &ElementKey) -> f32 {
        let engine = self.site.engine();
        if engine.motion().is_reduced() {
            return 1.0;
        }
        let nav = self.site.navigation();
        let reveal = nav
            .reveal()
            .is_revealed(key)
            .then(|| engine.reveal_progress(key, self.now_ms));
        reveal_amount(nav.entry_progress(key, self.now_ms), reveal)
    }
}

/// `reveal` is `None` until the element has been seen.
pub fn reveal_amount(entry: f32, reveal: Option<f32>) -> f32 {
    entry.min(reveal.unwrap_or(0.0)).clamp(0.0, 1.0)
}

/// Inset that renders a reveal class at progress `amount`: fade-up content
/// starts lower, slide-in starts to the right, zoom-in starts inset.
pub fn reveal_padding(class: RevealClass, amount: f32) -> Padding {
    let rest = 1.0 - amount.clamp(0.0, 1.0);
    match class {
        RevealClass::FadeUp => Padding {
            top: rest * REVEAL_SHIFT,
            ..Padding::ZERO
        },
        RevealClass::SlideIn => Padding {
            left: rest * REVEAL_SHIFT * 2.0,
            ..Padding::ZERO
        },
        RevealClass::ZoomIn => Padding::new(rest * ZOOM_INSET),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unseen_elements_are_hidden() {
        assert_eq!(reveal_amount(1.0, None), 0.0);
        assert_eq!(reveal_amount(1.0, Some(0.4)), 0.4);
        assert_eq!(reveal_amount(0.25, Some(1.0)), 0.25);
    }

    #[test]
    fn padding_settles_to_zero() {
        for class in [RevealClass::FadeUp, RevealClass::SlideIn, RevealClass::ZoomIn] {
            assert_eq!(reveal_padding(class, 1.0), Padding::ZERO);
        }
        assert_eq!(reveal_padding(RevealClass::FadeUp, 0.0).top, REVEAL_SHIFT);
        assert_eq!(reveal_padding(RevealClass::SlideIn, 0.5).left, REVEAL_SHIFT);
        assert_eq!(reveal_padding(RevealClass::ZoomIn, 0.0).bottom, ZOOM_INSET);
    }
}
