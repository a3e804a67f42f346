//! Page geometry. The desktop view stacks every section header and expands
//! only the active section's body. Blocks are drawn at the fixed heights
//! computed here, so the boxes handed to the scroll spy and the reveal
//! tracker are the ones on screen.

use vitae_core::animation::Vec2;
use vitae_core::bindings::ElementKey;
use vitae_core::navigation::{ElementSpan, RevealClass, Section, SectionBounds, SectionSet};
use vitae_core::utils::config::{Config, SectionKind};

use crate::constants::*;

/// One row of a section body.
#[derive(Debug, Clone, PartialEq)]
pub enum Row {
    /// An animated child element.
    Child { index: usize, height: f32 },
    /// A static label, e.g. a skill category heading.
    Label { text: String, height: f32 },
}

impl Row {
    pub fn height(&self) -> f32 {
        match self {
            Row::Child { height, .. } | Row::Label { height, .. } => *height,
        }
    }
}

/// Body rows of a section, in drawing order. Child indices are flat across
/// skill categories and match the controller's element keys.
pub fn rows_for(kind: SectionKind, config: &Config) -> Vec<Row> {
    let fixed = |count: usize, height: f32| -> Vec<Row> {
        (0..count)
            .map(|index| Row::Child { index, height })
            .collect()
    };
    match kind {
        SectionKind::Profile => {
            let mut rows = vec![Row::Child {
                index: 0,
                height: PROFILE_CARD_HEIGHT,
            }];
            rows.extend(
                (1..=config.personal.contact_links().len()).map(|index| Row::Child {
                    index,
                    height: CONTACT_ROW_HEIGHT,
                }),
            );
            rows
        }
        SectionKind::Experience => fixed(config.experience.len(), EXPERIENCE_CARD_HEIGHT),
        SectionKind::Education => fixed(config.education.len(), EDUCATION_CARD_HEIGHT),
        SectionKind::Skills => {
            let mut rows = Vec::new();
            let mut index = 0;
            for category in &config.skills {
                rows.push(Row::Label {
                    text: category.category.clone(),
                    height: CATEGORY_LABEL_HEIGHT,
                });
                for _ in &category.items {
                    rows.push(Row::Child {
                        index,
                        height: SKILL_ROW_HEIGHT,
                    });
                    index += 1;
                }
            }
            rows
        }
        SectionKind::Certifications => fixed(config.certifications.len(), CERTIFICATION_CARD_HEIGHT),
        SectionKind::Additional => fixed(config.additional.len(), ADDITIONAL_ROW_HEIGHT),
    }
}

/// Height of a section body including its padding.
pub fn body_height(rows: &[Row]) -> f32 {
    if rows.is_empty() {
        return 0.0;
    }
    let content: f32 = rows.iter().map(Row::height).sum();
    content + CHILD_SPACING * (rows.len() - 1) as f32 + 2.0 * SECTION_BODY_PADDING
}

/// Width of the centered content column for a viewport width.
pub fn content_width(viewport_width: f32) -> f32 {
    (viewport_width - 2.0 * PAGE_PADDING).clamp(0.0, CONTENT_MAX_WIDTH)
}

/// Width of a card inside a section body.
pub fn card_width(viewport_width: f32) -> f32 {
    (content_width(viewport_width) - 2.0 * SECTION_BODY_PADDING).max(0.0)
}

/// Drawn size of a certification card, used for tilt math.
pub fn tilt_card_size(viewport_width: f32) -> Vec2 {
    Vec2::new(card_width(viewport_width), CERTIFICATION_CARD_HEIGHT)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLayout {
    pub sections: Vec<SectionBounds>,
    pub spans: Vec<ElementSpan>,
    pub content_height: f32,
}

impl PageLayout {
    pub fn compute(config: &Config, sections: &SectionSet) -> Self {
        let mut layout = PageLayout::default();
        let mut top = PAGE_PADDING;
        let mut last_bottom = PAGE_PADDING;

        for section in sections.iter() {
            let body = if section.is_active() {
                layout.push_children(config, section, top + SECTION_HEADER_HEIGHT)
            } else {
                0.0
            };
            let bottom = top + SECTION_HEADER_HEIGHT + body;
            layout
                .sections
                .push(SectionBounds::new(section.id.clone(), top, bottom));
            top = bottom + SECTION_GAP;
            last_bottom = bottom;
        }

        layout.content_height = last_bottom + PAGE_PADDING;
        layout
    }

    fn push_children(&mut self, config: &Config, section: &Section, body_top: f32) -> f32 {
        let rows = rows_for(section.kind, config);
        let class = RevealClass::for_kind(section.kind);
        let mut y = body_top + SECTION_BODY_PADDING;
        for row in &rows {
            if let Row::Child { index, height } = row {
                self.spans.push(ElementSpan {
                    key: ElementKey::child(&section.id, *index),
                    top: y,
                    height: *height,
                    class,
                });
            }
            y += row.height() + CHILD_SPACING;
        }
        body_height(&rows)
    }

    pub fn bounds_of(&self, id: &str) -> Option<&SectionBounds> {
        self.sections.iter().find(|b| b.id == id)
    }

    /// Scroll offset that brings a section header to the top of the page.
    pub fn scroll_target(&self, id: &str) -> Option<f32> {
        self.bounds_of(id).map(|b| (b.top - PAGE_PADDING).max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use vitae_core::bindings::ViewBindings;
    use vitae_core::context::{MotionPreference, SiteContext};
    use vitae_core::navigation::{MemoryLocation, NavigationController};

    fn sections_with_active(fragment: &str) -> (Config, SectionSet) {
        let config = Config::bundled().unwrap();
        let ctx = SiteContext::new(config.clone(), MotionPreference::Reduced);
        let nav: NavigationController = NavigationController::new(
            &ctx,
            ViewBindings::new()
                .with_particle_surface(Some(Vec2::new(800.0, 600.0)))
                .navigation(),
            MemoryLocation::new(Some(fragment)),
            1200.0,
            0,
        );
        (config, nav.sections().clone())
    }

    #[test]
    fn only_active_section_has_children() {
        let (config, sections) = sections_with_active("#experiencia");
        let layout = PageLayout::compute(&config, &sections);
        assert_eq!(layout.sections.len(), sections.len());
        assert_eq!(layout.spans.len(), config.experience.len());
        assert!(layout
            .spans
            .iter()
            .all(|s| s.key.section() == Some("experiencia") && s.class == RevealClass::SlideIn));
    }

    #[test]
    fn sections_do_not_overlap() {
        let (config, sections) = sections_with_active("#habilidades");
        let layout = PageLayout::compute(&config, &sections);
        for pair in layout.sections.windows(2) {
            assert_eq!(pair[1].top, pair[0].bottom + SECTION_GAP);
        }
        let last = layout.sections.last().unwrap();
        assert_eq!(layout.content_height, last.bottom + PAGE_PADDING);
    }

    #[test]
    fn skill_keys_are_flat_across_categories() {
        let (config, sections) = sections_with_active("#habilidades");
        let layout = PageLayout::compute(&config, &sections);
        let total: usize = config.skills.iter().map(|c| c.items.len()).sum();
        assert_eq!(layout.spans.len(), total);
        assert_eq!(
            layout.spans.last().map(|s| s.key.clone()),
            Some(ElementKey::child("habilidades", total - 1))
        );
        let bounds = layout.bounds_of("habilidades").unwrap();
        let rows = rows_for(SectionKind::Skills, &config);
        let expected = SECTION_HEADER_HEIGHT + body_height(&rows);
        assert!((bounds.bottom - bounds.top - expected).abs() < 1e-3);
    }

    #[test]
    fn spans_sit_inside_their_section() {
        let (config, sections) = sections_with_active("#perfil");
        let layout = PageLayout::compute(&config, &sections);
        let bounds = layout.bounds_of("perfil").unwrap();
        assert_eq!(layout.spans.len(), config.child_count(SectionKind::Profile));
        for span in &layout.spans {
            assert!(span.top >= bounds.top + SECTION_HEADER_HEIGHT);
            assert!(span.top + span.height <= bounds.bottom);
        }
    }

    #[test]
    fn content_width_is_capped() {
        assert_eq!(content_width(2000.0), CONTENT_MAX_WIDTH);
        assert_eq!(content_width(400.0), 400.0 - 2.0 * PAGE_PADDING);
        assert_eq!(content_width(10.0), 0.0);
    }

    #[test]
    fn scroll_target_of_first_section_is_top() {
        let (config, sections) = sections_with_active("#perfil");
        let layout = PageLayout::compute(&config, &sections);
        assert_eq!(layout.scroll_target("perfil"), Some(0.0));
        assert_eq!(layout.scroll_target("missing"), None);
    }
}
