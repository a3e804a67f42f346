use crate::utils::config::{Config, SectionKind};

/// One navigable section of the page.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub title: String,
    pub icon: String,
    pub order: u32,
    pub kind: SectionKind,
    pub child_count: usize,
    active: bool,
}

impl Section {
    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// Sections in display order. Exactly one is active once
/// [`SectionSet::set_active`] has been called.
#[derive(Debug, Clone)]
pub struct SectionSet {
    sections: Vec<Section>,
}

impl SectionSet {
    pub fn from_config(config: &Config) -> Self {
        let sections = config
            .ordered_sections()
            .into_iter()
            .map(|s| Section {
                id: s.id.clone(),
                title: s.title.clone(),
                icon: s.icon.clone(),
                order: s.order,
                kind: s.kind,
                child_count: config.child_count(s.kind),
                active: false,
            })
            .collect();
        Self { sections }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index_of(id).is_some()
    }

    pub fn active(&self) -> Option<&Section> {
        self.sections.iter().find(|s| s.active)
    }

    /// Makes `id` the only active section. Unknown ids leave the set untouched.
    pub fn set_active(&mut self, id: &str) -> bool {
        if !self.contains(id) {
            return false;
        }
        for section in &mut self.sections {
            section.active = section.id == id;
        }
        true
    }

    /// Section before `id` in display order, without wrapping.
    pub fn previous(&self, id: &str) -> Option<&Section> {
        let index = self.index_of(id)?;
        index.checked_sub(1).and_then(|i| self.sections.get(i))
    }

    /// Section after `id` in display order, without wrapping.
    pub fn next(&self, id: &str) -> Option<&Section> {
        let index = self.index_of(id)?;
        self.sections.get(index + 1)
    }

    pub fn active_count(&self) -> usize {
        self.sections.iter().filter(|s| s.active).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sections() -> SectionSet {
        SectionSet::from_config(&Config::bundled().unwrap())
    }

    #[test]
    fn ordered_by_config_order() {
        let ids: Vec<_> = sections().iter().map(|s| s.id.clone()).collect();
        assert_eq!(
            ids,
            vec![
                "perfil",
                "experiencia",
                "educacion",
                "habilidades",
                "certificaciones",
                "adicional"
            ]
        );
    }

    #[test]
    fn exactly_one_active() {
        let mut set = sections();
        assert_eq!(set.active_count(), 0);
        assert!(set.set_active("educacion"));
        assert!(set.set_active("habilidades"));
        assert_eq!(set.active_count(), 1);
        assert_eq!(set.active().map(|s| s.id.as_str()), Some("habilidades"));
        assert!(!set.set_active("missing"));
        assert_eq!(set.active().map(|s| s.id.as_str()), Some("habilidades"));
    }

    #[test]
    fn neighbours_do_not_wrap() {
        let set = sections();
        assert!(set.previous("perfil").is_none());
        assert!(set.next("adicional").is_none());
        assert_eq!(set.next("perfil").map(|s| s.id.as_str()), Some("experiencia"));
    }

    #[test]
    fn child_counts_follow_content() {
        let config = Config::bundled().unwrap();
        let set = SectionSet::from_config(&config);
        let experience = set.get("experiencia").unwrap();
        assert_eq!(experience.child_count, config.experience.len());
    }
}
