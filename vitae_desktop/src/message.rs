use iced::widget::scrollable;
use iced::{window, Point, Size};
use vitae_core::animation::FrameToken;
use vitae_core::bindings::ElementKey;
use vitae_core::navigation::{KeyModifiers, NavKey};

#[derive(Debug, Clone)]
pub enum Message {
    /// Housekeeping tick: debounces, springs, one-shot timers.
    Tick,
    /// Display refresh for the particle loop that issued `token`.
    ParticleFrame(FrameToken),
    NavClicked(String),
    ToggleMenu,
    /// Click outside the open mobile menu.
    OutsideClick,
    Scrolled(scrollable::Viewport),
    ScrollTop,
    Resized(Size),
    Key(NavKey, KeyModifiers),
    /// Window-space pointer position.
    PointerMoved(Point),
    PointerLeft,
    ElementEntered(ElementKey),
    /// Element-local pointer position.
    ElementMoved(ElementKey, Point),
    ElementLeft(ElementKey),
    /// A link-like element was pressed: ripple, then open `url`.
    LinkPressed(ElementKey, String),
    CloseRequested(window::Id),
}
