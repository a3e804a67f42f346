//! Typed view bindings.
//!
//! Instead of looking elements up by id at runtime, the host declares up front
//! which optional handles it renders. Each subsystem receives the subset it
//! needs and disables the matching feature when a handle is absent.

use std::collections::HashSet;

use tracing::info;

use crate::animation::Vec2;

/// Stable key for an animated element, e.g. `experiencia/2` or `profile.title`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementKey(String);

impl ElementKey {
    /// The `index`-th animated child of a section.
    pub fn child(section: &str, index: usize) -> Self {
        Self(format!("{}/{}", section, index))
    }

    /// A singleton element such as the profile title.
    pub fn named(name: &str) -> Self {
        Self(name.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Owning section of a child key.
    pub fn section(&self) -> Option<&str> {
        self.0.split_once('/').map(|(section, _)| section)
    }
}

impl std::fmt::Display for ElementKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Every optional handle the host may provide.
#[derive(Debug, Clone, Default)]
pub struct ViewBindings {
    pub nav_bar: bool,
    /// Section ids that have a rendered navigation link.
    pub nav_links: HashSet<String>,
    pub menu_toggle: bool,
    pub scroll_to_top: bool,
    pub live_region: bool,
    /// Size of the particle overlay, when one is mounted.
    pub particle_surface: Option<Vec2>,
    pub profile_image: bool,
    pub loader: bool,
    pub typewriter_target: bool,
    pub skill_bars: bool,
}

impl ViewBindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_nav_links<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.nav_bar = true;
        self.nav_links = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_menu_toggle(mut self, bound: bool) -> Self {
        self.menu_toggle = bound;
        self
    }

    pub fn with_scroll_to_top(mut self, bound: bool) -> Self {
        self.scroll_to_top = bound;
        self
    }

    pub fn with_live_region(mut self, bound: bool) -> Self {
        self.live_region = bound;
        self
    }

    pub fn with_particle_surface(mut self, size: Option<Vec2>) -> Self {
        self.particle_surface = size;
        self
    }

    pub fn with_profile_image(mut self, bound: bool) -> Self {
        self.profile_image = bound;
        self
    }

    pub fn with_loader(mut self, bound: bool) -> Self {
        self.loader = bound;
        self
    }

    pub fn with_typewriter_target(mut self, bound: bool) -> Self {
        self.typewriter_target = bound;
        self
    }

    pub fn with_skill_bars(mut self, bound: bool) -> Self {
        self.skill_bars = bound;
        self
    }

    /// Handles used by the navigation controller.
    pub fn navigation(&self) -> NavigationBindings {
        let bindings = NavigationBindings {
            nav_links: self.nav_links.clone(),
            menu_toggle: self.menu_toggle,
            scroll_to_top: self.scroll_to_top,
            live_region: self.live_region,
        };
        bindings.log_missing();
        bindings
    }

    /// Handles used by the animation engine.
    pub fn engine(&self) -> EngineBindings {
        let bindings = EngineBindings {
            particle_surface: self.particle_surface,
            loader: self.loader,
            typewriter_target: self.typewriter_target,
            skill_bars: self.skill_bars,
        };
        bindings.log_missing();
        bindings
    }
}

#[derive(Debug, Clone, Default)]
pub struct NavigationBindings {
    pub nav_links: HashSet<String>,
    pub menu_toggle: bool,
    pub scroll_to_top: bool,
    pub live_region: bool,
}

impl NavigationBindings {
    pub fn has_link(&self, section: &str) -> bool {
        self.nav_links.contains(section)
    }

    fn log_missing(&self) {
        if self.nav_links.is_empty() {
            info!("no navigation links bound; link highlighting disabled");
        }
        if !self.menu_toggle {
            info!("menu toggle not bound; mobile menu disabled");
        }
        if !self.scroll_to_top {
            info!("scroll-to-top control not bound");
        }
        if !self.live_region {
            info!("live region not bound; announcements disabled");
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct EngineBindings {
    pub particle_surface: Option<Vec2>,
    pub loader: bool,
    pub typewriter_target: bool,
    pub skill_bars: bool,
}

impl EngineBindings {
    fn log_missing(&self) {
        if self.particle_surface.is_none() {
            info!("particle surface not bound; background disabled");
        }
        if !self.typewriter_target {
            info!("typewriter target not bound");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_keys_are_stable() {
        assert_eq!(ElementKey::child("experiencia", 2).as_str(), "experiencia/2");
        assert_eq!(ElementKey::named("profile.title").to_string(), "profile.title");
        assert_eq!(ElementKey::child("habilidades", 3).section(), Some("habilidades"));
        assert_eq!(ElementKey::named("loader").section(), None);
    }

    #[test]
    fn navigation_subset_carries_links() {
        let bindings = ViewBindings::new()
            .with_nav_links(["perfil", "educacion"])
            .with_menu_toggle(true);
        let nav = bindings.navigation();
        assert!(nav.has_link("educacion"));
        assert!(!nav.has_link("habilidades"));
        assert!(nav.menu_toggle);
        assert!(!nav.live_region);
    }
}
