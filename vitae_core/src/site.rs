//! Composition root: owns the context, the navigation controller and the
//! animation engine, and turns host input into [`SiteEvent`]s.

use rand::Rng;
use tracing::{debug, info};

use crate::animation::{AnimationEngine, FrameToken, Vec2};
use crate::bindings::{ElementKey, ViewBindings};
use crate::context::SiteContext;
use crate::navigation::{
    ElementSpan, KeyModifiers, Location, MemoryLocation, NavKey, NavigationController,
    NavigationEvent, NavigationOutcome, SectionBounds,
};
use crate::utils::config::SectionKind;

/// Work the host has to carry out after an input.
#[derive(Debug, Clone, PartialEq)]
pub enum SiteEvent {
    /// Bring a section's top into view.
    ScrollToSection(String),
    /// Scroll the page to an absolute offset.
    ScrollTo(f32),
    /// Window title changed (mirrors the fragment).
    SetTitle(String),
    /// New live-region text.
    Announce(String),
}

pub struct Site {
    ctx: SiteContext,
    nav: NavigationController<MemoryLocation>,
    engine: AnimationEngine,
    viewport: Vec2,
    spans: Vec<ElementSpan>,
    torn_down: bool,
}

impl Site {
    pub fn new<R: Rng + ?Sized>(
        ctx: SiteContext,
        bindings: &ViewBindings,
        location: MemoryLocation,
        viewport: Vec2,
        rng: &mut R,
        now_ms: u64,
    ) -> Self {
        let nav = NavigationController::new(&ctx, bindings.navigation(), location, viewport.x, now_ms);
        let engine = AnimationEngine::new(&ctx, &bindings.engine(), rng);
        info!(
            section = nav.active_id().unwrap_or("-"),
            motion = ?ctx.motion(),
            "site ready"
        );
        Self {
            ctx,
            nav,
            engine,
            viewport,
            spans: Vec::new(),
            torn_down: false,
        }
    }

    /// Starts load-time effects. Returns the initial title and scroll target.
    pub fn start(&mut self, now_ms: u64) -> Vec<SiteEvent> {
        self.engine.start(now_ms);
        let mut events = vec![SiteEvent::SetTitle(self.title())];
        if let Some(active) = self.nav.active_id() {
            events.push(SiteEvent::ScrollToSection(active.to_string()));
        }
        events
    }

    pub fn context(&self) -> &SiteContext {
        &self.ctx
    }

    pub fn navigation(&self) -> &NavigationController<MemoryLocation> {
        &self.nav
    }

    pub fn engine(&self) -> &AnimationEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut AnimationEngine {
        &mut self.engine
    }

    pub fn click_link(&mut self, id: &str, now_ms: u64) -> Vec<SiteEvent> {
        let outcome = self.nav.on_link_click(id, now_ms);
        self.after_navigation(outcome)
    }

    pub fn navigate_fragment(&mut self, fragment: &str, now_ms: u64) -> Vec<SiteEvent> {
        self.nav.location_mut().push_fragment(fragment);
        let outcome = self.nav.on_hash_change(now_ms);
        let mut events = self.after_navigation(outcome);
        if events.is_empty() {
            events.push(SiteEvent::SetTitle(self.title()));
        }
        events
    }

    /// Keyboard input: Alt+Left/Right walk history, Ctrl/Cmd+arrows step
    /// through sections, Escape closes the menu.
    pub fn key(&mut self, key: NavKey, modifiers: KeyModifiers, now_ms: u64) -> Vec<SiteEvent> {
        if modifiers.alt && !modifiers.command {
            match key {
                NavKey::ArrowLeft => return self.history_back(now_ms),
                NavKey::ArrowRight => return self.history_forward(now_ms),
                _ => {}
            }
        }
        match self.nav.on_key(key, modifiers, now_ms) {
            Some(outcome) => self.after_navigation(outcome),
            None => Vec::new(),
        }
    }

    pub fn history_back(&mut self, now_ms: u64) -> Vec<SiteEvent> {
        if !self.nav.location_mut().back() {
            return Vec::new();
        }
        let outcome = self.nav.on_hash_change(now_ms);
        self.after_navigation(outcome)
    }

    pub fn history_forward(&mut self, now_ms: u64) -> Vec<SiteEvent> {
        if !self.nav.location_mut().forward() {
            return Vec::new();
        }
        let outcome = self.nav.on_hash_change(now_ms);
        self.after_navigation(outcome)
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.nav.toggle_menu()
    }

    pub fn outside_click(&mut self) -> bool {
        self.nav.on_outside_click()
    }

    pub fn resize(&mut self, size: Vec2, now_ms: u64) {
        self.viewport = size;
        self.nav.on_resize(size.x, now_ms);
        self.engine.resize(size);
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Scroll sample from the host.
    pub fn scroll(&mut self, offset: f32, now_ms: u64) {
        if let Some(id) = self.nav.on_scroll(offset, now_ms) {
            debug!(section = %id, "scroll highlight");
        }
        self.observe_reveals(offset, now_ms);
    }

    pub fn scroll_to_top(&self) -> Vec<SiteEvent> {
        vec![SiteEvent::ScrollTo(0.0)]
    }

    /// New page geometry after the host laid out the sections.
    pub fn set_layout(&mut self, sections: Vec<SectionBounds>, spans: Vec<ElementSpan>, now_ms: u64) {
        self.nav.set_layout(sections);
        self.spans = spans;
        let offset = self.nav.scroll_offset();
        self.observe_reveals(offset, now_ms);
    }

    pub fn pointer_moved(&mut self, pointer: Option<Vec2>) {
        self.engine.set_pointer(pointer);
    }

    /// Per-frame housekeeping. Returns true while something animates.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        for event in self.nav.poll(now_ms) {
            match event {
                NavigationEvent::Highlight(id) => debug!(section = %id, "scroll highlight"),
                NavigationEvent::MenuClosed => debug!("menu closed"),
            }
        }
        let menu = self.nav.update();
        let effects = self.engine.update(now_ms);
        menu || effects || self.nav.is_animating(now_ms)
    }

    /// The host keeps ticking while this holds, even if nothing animates.
    pub fn has_pending_input(&self) -> bool {
        self.nav.has_pending_input()
    }

    pub fn particle_token(&self) -> Option<FrameToken> {
        self.engine.particle_token()
    }

    pub fn particle_frame(&mut self, token: FrameToken, now_ms: u64) -> bool {
        self.engine.particle_frame(token, now_ms)
    }

    /// `<name> · #<fragment>`
    pub fn title(&self) -> String {
        let name = &self.ctx.config().personal.name;
        match self.nav.location().fragment().or(self.nav.active_id()) {
            Some(fragment) => format!("{} · #{}", name, fragment),
            None => name.clone(),
        }
    }

    /// Stops the particle loop and drops the field.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.engine.destroy();
        self.torn_down = true;
        info!("site torn down");
    }

    /// One-shot timers scheduled by navigation and effects together.
    pub fn scheduled_timers(&self) -> usize {
        self.nav.scheduled_timers() + self.engine.scheduled_timers()
    }

    fn observe_reveals(&mut self, offset: f32, now_ms: u64) {
        if self.spans.is_empty() {
            return;
        }
        let revealed = self.nav.observe(&self.spans, offset, self.viewport.y);
        for (key, _class) in revealed {
            if self.is_skill(&key) {
                self.engine.fill_skill(key.clone(), now_ms);
            }
            self.engine.play_reveal(key, now_ms);
        }
    }

    fn is_skill(&self, key: &ElementKey) -> bool {
        key.section()
            .and_then(|id| self.nav.sections().get(id))
            .is_some_and(|s| s.kind == SectionKind::Skills)
    }

    fn after_navigation(&mut self, outcome: NavigationOutcome) -> Vec<SiteEvent> {
        let NavigationOutcome::Changed(transition) = outcome else {
            return Vec::new();
        };
        let mut events = vec![
            SiteEvent::ScrollToSection(transition.to.clone()),
            SiteEvent::SetTitle(self.title()),
        ];
        if let Some(text) = transition.announcement {
            events.push(SiteEvent::Announce(text));
        }
        events
    }
}

impl Drop for Site {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::MotionPreference;
    use crate::utils::config::Config;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn site(fragment: Option<&str>) -> Site {
        let ctx = SiteContext::new(Config::bundled().unwrap(), MotionPreference::Full);
        let bindings = ViewBindings::new()
            .with_nav_links(["perfil", "experiencia", "educacion", "habilidades"])
            .with_live_region(true)
            .with_skill_bars(true)
            .with_particle_surface(Some(Vec2::new(1200.0, 800.0)));
        Site::new(
            ctx,
            &bindings,
            MemoryLocation::new(fragment),
            Vec2::new(1200.0, 800.0),
            &mut StdRng::seed_from_u64(3),
            0,
        )
    }

    #[test]
    fn start_sets_title_and_scroll() {
        let mut site = site(Some("#educacion"));
        let events = site.start(0);
        assert_eq!(
            events,
            vec![
                SiteEvent::SetTitle("Alex Rivera · #educacion".into()),
                SiteEvent::ScrollToSection("educacion".into()),
            ]
        );
        assert!(site.particle_token().is_some());
    }

    #[test]
    fn link_click_emits_transition_events() {
        let mut site = site(None);
        let events = site.click_link("habilidades", 100);
        assert_eq!(events[0], SiteEvent::ScrollToSection("habilidades".into()));
        assert_eq!(events[1], SiteEvent::SetTitle("Alex Rivera · #habilidades".into()));
        assert_eq!(events[2], SiteEvent::Announce("Sección activa: Habilidades".into()));
        assert!(site.click_link("habilidades", 200).is_empty());
    }

    #[test]
    fn alt_arrows_walk_history() {
        let mut site = site(None);
        site.click_link("experiencia", 0);
        site.click_link("educacion", 10);
        let alt = KeyModifiers {
            command: false,
            alt: true,
        };
        site.key(NavKey::ArrowLeft, alt, 20);
        assert_eq!(site.navigation().active_id(), Some("experiencia"));
        site.key(NavKey::ArrowLeft, alt, 30);
        assert_eq!(site.navigation().active_id(), Some("perfil"));
        site.key(NavKey::ArrowRight, alt, 40);
        assert_eq!(site.navigation().active_id(), Some("experiencia"));
    }

    #[test]
    fn skills_fill_when_revealed() {
        let mut site = site(None);
        let key = ElementKey::child("habilidades", 0);
        site.set_layout(
            vec![SectionBounds::new("habilidades", 0.0, 400.0)],
            vec![ElementSpan {
                key: key.clone(),
                top: 50.0,
                height: 40.0,
                class: crate::navigation::RevealClass::ZoomIn,
            }],
            0,
        );
        assert!(site.navigation().reveal().is_revealed(&key));
        assert_eq!(site.engine().scheduled_timers(), 2);
    }

    #[test]
    fn teardown_stops_frames() {
        let mut site = site(None);
        site.start(0);
        let token = site.particle_token().unwrap();
        site.teardown();
        assert!(!site.particle_frame(token, 16));
    }
}
