//! Section navigation state machine.
//!
//! One state per configured section. Transitions come from navigation links,
//! fragment changes and Ctrl/Cmd + arrow keys; scrolling only moves the link
//! highlight.

use tracing::{debug, info};

use crate::animation::timeline::Timeline;
use crate::bindings::{ElementKey, NavigationBindings};
use crate::context::SiteContext;
use crate::navigation::location::{Location, MemoryLocation};
use crate::navigation::menu::MobileMenu;
use crate::navigation::reveal::{ElementSpan, RevealClass, RevealTracker};
use crate::navigation::scroll_spy::{ScrollSpy, SectionBounds};
use crate::navigation::section::{Section, SectionSet};
use crate::utils::config::NavigationTuning;
use crate::utils::rate_limit::Debounce;

/// What triggered a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationCause {
    Initial,
    Link,
    Fragment,
    Keyboard,
}

/// Effects of a completed transition, for the host to act on.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub from: Option<String>,
    pub to: String,
    pub cause: NavigationCause,
    /// Text for the live region, when one is bound.
    pub announcement: Option<String>,
    pub fragment_pushed: bool,
    /// Entry timers scheduled for the target's children.
    pub scheduled: usize,
    pub menu_closed: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NavigationOutcome {
    Changed(Transition),
    /// Target is already active.
    Unchanged,
    /// Target is not a configured section.
    Ignored,
}

impl NavigationOutcome {
    pub fn transition(&self) -> Option<&Transition> {
        match self {
            NavigationOutcome::Changed(t) => Some(t),
            _ => None,
        }
    }
}

/// Keys the controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Escape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyModifiers {
    /// Ctrl, or Cmd on macOS.
    pub command: bool,
    pub alt: bool,
}

/// Side effects released by [`NavigationController::poll`].
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationEvent {
    /// Scroll-spy moved the link highlight.
    Highlight(String),
    MenuClosed,
}

pub struct NavigationController<L: Location = MemoryLocation> {
    sections: SectionSet,
    location: L,
    bindings: NavigationBindings,
    tuning: NavigationTuning,
    scroll_to_top_enabled: bool,
    menu: MobileMenu,
    resize: Debounce<f32>,
    viewport_width: f32,
    spy: ScrollSpy,
    reveal: RevealTracker,
    entries: Timeline,
    highlighted: Option<String>,
    announcement: Option<String>,
    scroll_offset: f32,
}

impl<L: Location> NavigationController<L> {
    /// Builds the controller and enters the initial section: the one named
    /// by the fragment, else the default. An unknown fragment is replaced
    /// with the default's id.
    pub fn new(
        ctx: &SiteContext,
        bindings: NavigationBindings,
        location: L,
        viewport_width: f32,
        now_ms: u64,
    ) -> Self {
        let config = ctx.config();
        let tuning = config.navigation.clone();
        let motion = ctx.motion();

        let menu_enabled = bindings.menu_toggle && config.features.mobile_menu;
        let mut controller = Self {
            sections: SectionSet::from_config(config),
            location,
            scroll_to_top_enabled: bindings.scroll_to_top && config.features.scroll_to_top,
            bindings,
            menu: MobileMenu::new(menu_enabled, motion),
            resize: Debounce::new(tuning.resize_debounce_ms),
            viewport_width,
            spy: ScrollSpy::new(
                tuning.scroll_lookahead,
                tuning.scroll_throttle_ms,
                tuning.scroll_spy_cooldown_ms,
            ),
            reveal: RevealTracker::new(tuning.reveal_threshold),
            entries: Timeline::new(motion),
            highlighted: None,
            announcement: None,
            scroll_offset: 0.0,
            tuning,
        };

        let default_id = config.default_section_id().to_string();
        let initial = match controller.location.fragment() {
            Some(fragment) if controller.sections.contains(fragment) => fragment.to_string(),
            Some(fragment) => {
                info!(fragment, fallback = %default_id, "unknown fragment at load");
                controller.location.replace_fragment(&default_id);
                default_id
            }
            None => default_id,
        };
        controller.enter(&initial, NavigationCause::Initial, now_ms);
        controller
    }

    /// Activates `id`. The single entry point for every transition.
    pub fn navigate(&mut self, id: &str, cause: NavigationCause, now_ms: u64) -> NavigationOutcome {
        if !self.sections.contains(id) {
            info!(target_section = id, "ignoring navigation to unknown section");
            return NavigationOutcome::Ignored;
        }
        if self.active_id() == Some(id) {
            return NavigationOutcome::Unchanged;
        }
        NavigationOutcome::Changed(self.enter(id, cause, now_ms))
    }

    /// Navigation link clicked. Clicking the active section still closes the
    /// menu and moves the highlight back to it.
    pub fn on_link_click(&mut self, id: &str, now_ms: u64) -> NavigationOutcome {
        let outcome = self.navigate(id, NavigationCause::Link, now_ms);
        if outcome == NavigationOutcome::Unchanged {
            self.menu.close();
            self.highlighted = self.bindings.has_link(id).then(|| id.to_string());
            self.spy.suppress(id, now_ms);
        }
        outcome
    }

    /// The location's fragment changed (history walk or external edit).
    /// Never adds history; an unknown fragment is replaced in place with the
    /// default section.
    pub fn on_hash_change(&mut self, now_ms: u64) -> NavigationOutcome {
        let target = match self.location.fragment() {
            Some(fragment) if self.sections.contains(fragment) => fragment.to_string(),
            Some(fragment) => {
                let fallback = self.default_id();
                info!(fragment, %fallback, "unknown fragment");
                self.location.replace_fragment(&fallback);
                fallback
            }
            None => self.default_id(),
        };
        self.navigate(&target, NavigationCause::Fragment, now_ms)
    }

    /// Keyboard input. Returns `None` for keys that are not navigation keys.
    pub fn on_key(&mut self, key: NavKey, modifiers: KeyModifiers, now_ms: u64) -> Option<NavigationOutcome> {
        if key == NavKey::Escape {
            self.close_menu();
            return None;
        }
        if !modifiers.command || modifiers.alt {
            return None;
        }
        let active = self.active_id()?.to_string();
        let target = match key {
            NavKey::ArrowLeft | NavKey::ArrowUp => self.sections.previous(&active),
            NavKey::ArrowRight | NavKey::ArrowDown => self.sections.next(&active),
            NavKey::Escape => None,
        };
        match target.map(|s| s.id.clone()) {
            Some(id) => Some(self.navigate(&id, NavigationCause::Keyboard, now_ms)),
            None => Some(NavigationOutcome::Unchanged),
        }
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu.toggle()
    }

    pub fn close_menu(&mut self) -> bool {
        self.menu.close()
    }

    /// Click outside the open menu.
    pub fn on_outside_click(&mut self) -> bool {
        self.menu.close()
    }

    /// Raw resize; acted upon after the debounce in [`Self::poll`].
    pub fn on_resize(&mut self, width: f32, now_ms: u64) {
        self.resize.push(width, now_ms);
    }

    /// Raw scroll sample. Returns a new highlight when the throttle lets the
    /// sample through and the section under the reading line changed.
    pub fn on_scroll(&mut self, offset: f32, now_ms: u64) -> Option<String> {
        self.scroll_offset = offset;
        let id = self.spy.sample(offset, now_ms)?;
        self.highlight(&id)
    }

    /// Releases trailing scroll samples and settled resizes.
    pub fn poll(&mut self, now_ms: u64) -> Vec<NavigationEvent> {
        let mut events = Vec::new();

        if let Some(id) = self.spy.flush(now_ms) {
            if let Some(id) = self.highlight(&id) {
                events.push(NavigationEvent::Highlight(id));
            }
        }

        if let Some(width) = self.resize.poll(now_ms) {
            let previous = std::mem::replace(&mut self.viewport_width, width);
            let breakpoint = self.tuning.breakpoint;
            let crossed = (previous <= breakpoint) != (width <= breakpoint);
            if (width > breakpoint || crossed) && self.menu.close() {
                debug!(previous, width, "menu closed after resize");
                events.push(NavigationEvent::MenuClosed);
            }
        }

        events
    }

    /// True while a throttled scroll sample or a resize is waiting for
    /// [`Self::poll`].
    pub fn has_pending_input(&self) -> bool {
        self.spy.has_pending() || self.resize.has_pending()
    }

    /// Advances the menu slide; true while it moves.
    pub fn update(&mut self) -> bool {
        self.menu.update()
    }

    pub fn set_layout(&mut self, bounds: Vec<SectionBounds>) {
        self.spy.set_layout(bounds);
    }

    /// Samples element visibility and returns first-time reveals.
    pub fn observe(
        &mut self,
        spans: &[ElementSpan],
        viewport_top: f32,
        viewport_height: f32,
    ) -> Vec<(ElementKey, RevealClass)> {
        self.reveal
            .observe_viewport(spans, viewport_top, viewport_height)
    }

    pub fn reveal(&self) -> &RevealTracker {
        &self.reveal
    }

    /// Eased entry progress of a section child; 1.0 when never scheduled.
    pub fn entry_progress(&self, key: &ElementKey, now_ms: u64) -> f32 {
        self.entries.eased_or_done(key, now_ms)
    }

    pub fn is_animating(&self, now_ms: u64) -> bool {
        self.entries.is_animating(now_ms)
    }

    pub fn scheduled_timers(&self) -> usize {
        self.entries.scheduled_total()
    }

    pub fn sections(&self) -> &SectionSet {
        &self.sections
    }

    pub fn active(&self) -> Option<&Section> {
        self.sections.active()
    }

    pub fn active_id(&self) -> Option<&str> {
        self.sections.active().map(|s| s.id.as_str())
    }

    /// Section whose navigation link is highlighted.
    pub fn highlighted(&self) -> Option<&str> {
        self.highlighted.as_deref()
    }

    pub fn announcement(&self) -> Option<&str> {
        self.announcement.as_deref()
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu.is_open()
    }

    pub fn menu_progress(&self) -> f32 {
        self.menu.progress()
    }

    pub fn is_mobile(&self) -> bool {
        self.viewport_width <= self.tuning.breakpoint
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    pub fn scroll_to_top_visible(&self) -> bool {
        self.scroll_to_top_enabled && self.scroll_offset > self.tuning.scroll_top_threshold
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    pub fn location_mut(&mut self) -> &mut L {
        &mut self.location
    }

    fn default_id(&self) -> String {
        self.tuning
            .default_section
            .clone()
            .or_else(|| self.sections.iter().next().map(|s| s.id.clone()))
            .unwrap_or_default()
    }

    fn highlight(&mut self, id: &str) -> Option<String> {
        if !self.bindings.has_link(id) || self.highlighted.as_deref() == Some(id) {
            return None;
        }
        self.highlighted = Some(id.to_string());
        Some(id.to_string())
    }

    fn enter(&mut self, id: &str, cause: NavigationCause, now_ms: u64) -> Transition {
        let from = self.active_id().map(str::to_string);
        self.sections.set_active(id);

        self.highlighted = self.bindings.has_link(id).then(|| id.to_string());

        let fragment_pushed = matches!(cause, NavigationCause::Link | NavigationCause::Keyboard)
            && self.location.fragment() != Some(id);
        if fragment_pushed {
            self.location.push_fragment(id);
        }

        let (title, child_count) = match self.sections.get(id) {
            Some(section) => (section.title.clone(), section.child_count),
            None => (id.to_string(), 0),
        };

        let mut scheduled = 0;
        for index in 0..child_count {
            let start = now_ms + stagger_offset(index, self.tuning.stagger_delay_ms);
            if self
                .entries
                .schedule(ElementKey::child(id, index), start, self.tuning.entry_duration_ms)
            {
                scheduled += 1;
            }
        }

        let announcement = (cause != NavigationCause::Initial && self.bindings.live_region)
            .then(|| format!("{} {}", self.tuning.announce_prefix, title));
        if announcement.is_some() {
            self.announcement = announcement.clone();
        }

        let menu_closed = self.menu.close();
        self.spy.suppress(id, now_ms);

        debug!(
            from = from.as_deref().unwrap_or("-"),
            to = id,
            ?cause,
            scheduled,
            "section transition"
        );

        Transition {
            from,
            to: id.to_string(),
            cause,
            announcement,
            fragment_pushed,
            scheduled,
            menu_closed,
        }
    }
}

/// Stagger offset of the `index`-th child.
pub fn stagger_offset(index: usize, delay_ms: u64) -> u64 {
    index as u64 * delay_ms
}

impl<L: Location> std::fmt::Debug for NavigationController<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigationController")
            .field("active", &self.active_id())
            .field("highlighted", &self.highlighted)
            .field("menu_open", &self.menu.is_open())
            .field("revealed", &self.reveal.seen_len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindings::ViewBindings;
    use crate::context::MotionPreference;
    use crate::utils::config::Config;
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;

    const IDS: [&str; 6] = [
        "perfil",
        "experiencia",
        "educacion",
        "habilidades",
        "certificaciones",
        "adicional",
    ];

    fn controller_with(fragment: Option<&str>, motion: MotionPreference) -> NavigationController {
        let ctx = SiteContext::new(Config::bundled().unwrap(), motion);
        let bindings = ViewBindings::new()
            .with_nav_links(IDS)
            .with_menu_toggle(true)
            .with_scroll_to_top(true)
            .with_live_region(true)
            .navigation();
        NavigationController::new(&ctx, bindings, MemoryLocation::new(fragment), 1200.0, 0)
    }

    fn controller(fragment: Option<&str>) -> NavigationController {
        controller_with(fragment, MotionPreference::Full)
    }

    #[test]
    fn starts_on_default_without_fragment() {
        let nav = controller(None);
        assert_eq!(nav.active_id(), Some("perfil"));
        assert_eq!(nav.highlighted(), Some("perfil"));
        assert_eq!(nav.announcement(), None);
        assert_eq!(nav.location().fragment(), None);
    }

    #[test]
    fn unknown_fragment_is_replaced() {
        let nav = controller(Some("#nope"));
        assert_eq!(nav.active_id(), Some("perfil"));
        assert_eq!(nav.location().fragment(), Some("perfil"));
        assert_eq!(nav.location().history_len(), 1);
    }

    #[test]
    fn transition_effects() {
        let mut nav = controller(None);
        let outcome = nav.navigate("experiencia", NavigationCause::Link, 1_000);
        let transition = outcome.transition().unwrap();
        assert_eq!(transition.from.as_deref(), Some("perfil"));
        assert!(transition.fragment_pushed);
        assert_eq!(
            transition.announcement.as_deref(),
            Some("Sección activa: Experiencia")
        );
        assert_eq!(nav.location().fragment(), Some("experiencia"));
        assert_eq!(nav.highlighted(), Some("experiencia"));

        // second child starts one stagger step later
        let second = ElementKey::child("experiencia", 1);
        assert_eq!(nav.entry_progress(&second, 1_100), 0.0);
        assert!(nav.entry_progress(&second, 1_400) > 0.0);
    }

    #[test]
    fn same_section_is_unchanged_and_unknown_is_ignored() {
        let mut nav = controller(None);
        assert_eq!(
            nav.navigate("perfil", NavigationCause::Link, 0),
            NavigationOutcome::Unchanged
        );
        assert_eq!(
            nav.navigate("missing", NavigationCause::Link, 0),
            NavigationOutcome::Ignored
        );
        assert_eq!(nav.active_id(), Some("perfil"));
    }

    #[test]
    fn hash_change_does_not_push_again() {
        let mut nav = controller(None);
        nav.location_mut().push_fragment("habilidades");
        let outcome = nav.on_hash_change(10);
        assert_matches!(outcome, NavigationOutcome::Changed(ref t) if !t.fragment_pushed);
        assert_eq!(nav.location().history_len(), 2);
    }

    #[test]
    fn walking_back_to_first_entry_keeps_forward_history() {
        let mut nav = controller(None);
        nav.navigate("experiencia", NavigationCause::Link, 0);
        assert!(nav.location_mut().back());
        let outcome = nav.on_hash_change(10);
        assert_matches!(outcome, NavigationOutcome::Changed(ref t) if !t.fragment_pushed);
        assert_eq!(nav.active_id(), Some("perfil"));
        assert_eq!(nav.location().fragment(), None);
        assert!(nav.location().can_go_forward());

        assert!(nav.location_mut().forward());
        nav.on_hash_change(20);
        assert_eq!(nav.active_id(), Some("experiencia"));
        assert_eq!(nav.location().history_len(), 2);
    }

    #[test]
    fn unknown_hash_change_replaces_fragment() {
        let mut nav = controller(Some("experiencia"));
        nav.location_mut().push_fragment("nope");
        assert_matches!(nav.on_hash_change(10), NavigationOutcome::Changed(_));
        assert_eq!(nav.active_id(), Some("perfil"));
        assert_eq!(nav.location().fragment(), Some("perfil"));
        assert_eq!(nav.location().history_len(), 2);
    }

    #[test]
    fn arrow_keys_step_without_wrapping() {
        let mut nav = controller(None);
        let command = KeyModifiers {
            command: true,
            alt: false,
        };
        assert_eq!(
            nav.on_key(NavKey::ArrowLeft, command, 0),
            Some(NavigationOutcome::Unchanged)
        );
        assert_matches!(
            nav.on_key(NavKey::ArrowRight, command, 0),
            Some(NavigationOutcome::Changed(_))
        );
        assert_eq!(nav.active_id(), Some("experiencia"));
        assert_eq!(nav.on_key(NavKey::ArrowDown, KeyModifiers::default(), 0), None);
    }

    #[test]
    fn escape_and_navigation_close_menu() {
        let mut nav = controller(None);
        assert!(nav.toggle_menu());
        nav.on_key(NavKey::Escape, KeyModifiers::default(), 0);
        assert!(!nav.is_menu_open());

        nav.toggle_menu();
        let outcome = nav.navigate("educacion", NavigationCause::Link, 0);
        assert!(outcome.transition().unwrap().menu_closed);
        assert!(!nav.is_menu_open());
    }

    #[test]
    fn link_click_on_active_section_still_closes_menu() {
        let mut nav = controller(None);
        nav.toggle_menu();
        assert_eq!(nav.on_link_click("perfil", 0), NavigationOutcome::Unchanged);
        assert!(!nav.is_menu_open());
    }

    #[test]
    fn resize_within_mobile_range_keeps_menu() {
        let mut nav = controller(None);
        nav.on_resize(600.0, 0);
        nav.poll(300);
        nav.toggle_menu();
        nav.on_resize(500.0, 400);
        assert!(nav.poll(700).is_empty());
        assert!(nav.is_menu_open());
        nav.on_resize(900.0, 800);
        assert!(nav.has_pending_input());
        assert_eq!(nav.poll(1_100), vec![NavigationEvent::MenuClosed]);
        assert!(!nav.has_pending_input());
    }

    #[test]
    fn scroll_spy_muted_after_navigation() {
        let mut nav = controller(None);
        nav.set_layout(vec![
            SectionBounds::new("perfil", 0.0, 600.0),
            SectionBounds::new("experiencia", 600.0, 1400.0),
        ]);
        nav.navigate("experiencia", NavigationCause::Link, 0);
        assert_eq!(nav.on_scroll(0.0, 100), None);
        assert_eq!(nav.highlighted(), Some("experiencia"));
        assert_eq!(nav.on_scroll(0.0, 2_000).as_deref(), Some("perfil"));
        assert_eq!(nav.active_id(), Some("experiencia"));
    }

    #[test]
    fn clicking_active_link_restores_highlight() {
        let mut nav = controller(None);
        nav.set_layout(vec![
            SectionBounds::new("perfil", 0.0, 600.0),
            SectionBounds::new("experiencia", 600.0, 1400.0),
        ]);
        nav.navigate("experiencia", NavigationCause::Link, 0);
        assert_eq!(nav.on_scroll(0.0, 2_000).as_deref(), Some("perfil"));

        assert_eq!(nav.on_link_click("experiencia", 2_100), NavigationOutcome::Unchanged);
        assert_eq!(nav.highlighted(), Some("experiencia"));
        assert_eq!(nav.on_scroll(0.0, 2_300), None);
        assert_eq!(nav.highlighted(), Some("experiencia"));
    }

    #[test]
    fn scroll_to_top_threshold() {
        let mut nav = controller(None);
        nav.on_scroll(100.0, 0);
        assert!(!nav.scroll_to_top_visible());
        nav.on_scroll(400.0, 500);
        assert!(nav.scroll_to_top_visible());
    }

    #[test]
    fn reduced_motion_schedules_no_entries() {
        let mut nav = controller_with(None, MotionPreference::Reduced);
        let outcome = nav.navigate("experiencia", NavigationCause::Link, 0);
        assert_eq!(outcome.transition().unwrap().scheduled, 0);
        assert_eq!(nav.scheduled_timers(), 0);
        assert_eq!(nav.entry_progress(&ElementKey::child("experiencia", 0), 0), 1.0);
    }
}
