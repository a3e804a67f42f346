use std::collections::HashMap;

use crate::bindings::ElementKey;
use crate::utils::config::SectionKind;

/// Entrance style applied when an element first becomes visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevealClass {
    FadeUp,
    SlideIn,
    ZoomIn,
}

impl RevealClass {
    pub fn for_kind(kind: SectionKind) -> Self {
        match kind {
            SectionKind::Profile | SectionKind::Additional => RevealClass::FadeUp,
            SectionKind::Experience | SectionKind::Education => RevealClass::SlideIn,
            SectionKind::Skills | SectionKind::Certifications => RevealClass::ZoomIn,
        }
    }
}

/// An animated element's vertical extent in page coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementSpan {
    pub key: ElementKey,
    pub top: f32,
    pub height: f32,
    pub class: RevealClass,
}

/// Fraction of an element (0..=1) inside the viewport.
pub fn visible_ratio(top: f32, height: f32, viewport_top: f32, viewport_height: f32) -> f32 {
    if height <= 0.0 {
        return 0.0;
    }
    let start = top.max(viewport_top);
    let end = (top + height).min(viewport_top + viewport_height);
    ((end - start).max(0.0) / height).min(1.0)
}

/// The seen-set: every element is revealed at most once per run.
#[derive(Debug, Clone)]
pub struct RevealTracker {
    threshold: f32,
    seen: HashMap<ElementKey, RevealClass>,
}

impl RevealTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            seen: HashMap::new(),
        }
    }

    /// Records a visibility sample. Returns the class the first time the
    /// element crosses the threshold, `None` afterwards.
    pub fn observe(&mut self, key: &ElementKey, ratio: f32, class: RevealClass) -> Option<RevealClass> {
        if ratio < self.threshold || self.seen.contains_key(key) {
            return None;
        }
        self.seen.insert(key.clone(), class);
        Some(class)
    }

    /// Samples every span against the viewport, returning new reveals.
    pub fn observe_viewport(
        &mut self,
        spans: &[ElementSpan],
        viewport_top: f32,
        viewport_height: f32,
    ) -> Vec<(ElementKey, RevealClass)> {
        spans
            .iter()
            .filter_map(|span| {
                let ratio = visible_ratio(span.top, span.height, viewport_top, viewport_height);
                self.observe(&span.key, ratio, span.class)
                    .map(|class| (span.key.clone(), class))
            })
            .collect()
    }

    pub fn class_of(&self, key: &ElementKey) -> Option<RevealClass> {
        self.seen.get(key).copied()
    }

    pub fn is_revealed(&self, key: &ElementKey) -> bool {
        self.seen.contains_key(key)
    }

    pub fn seen_len(&self) -> usize {
        self.seen.len()
    }
}
