//! The page fragment (`#section`) and its history.

/// Read/write access to the current fragment, without the leading `#`.
pub trait Location {
    fn fragment(&self) -> Option<&str>;

    /// Sets the fragment and records a history entry.
    fn push_fragment(&mut self, fragment: &str);

    /// Sets the fragment in place, without a history entry.
    fn replace_fragment(&mut self, fragment: &str);
}

/// Strips a leading `#` and maps the empty string to `None`.
pub fn normalize_fragment(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_start_matches('#');
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// In-process location with browser-like back/forward history.
#[derive(Debug, Clone)]
pub struct MemoryLocation {
    entries: Vec<Option<String>>,
    index: usize,
}

impl MemoryLocation {
    pub fn new(initial: Option<&str>) -> Self {
        Self {
            entries: vec![initial.and_then(normalize_fragment)],
            index: 0,
        }
    }

    /// Moves one entry back. Returns false at the start of history.
    pub fn back(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Moves one entry forward. Returns false at the end of history.
    pub fn forward(&mut self) -> bool {
        if self.index + 1 >= self.entries.len() {
            return false;
        }
        self.index += 1;
        true
    }

    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    pub fn history_len(&self) -> usize {
        self.entries.len()
    }
}

impl Default for MemoryLocation {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Location for MemoryLocation {
    fn fragment(&self) -> Option<&str> {
        self.entries.get(self.index).and_then(|e| e.as_deref())
    }

    fn push_fragment(&mut self, fragment: &str) {
        self.entries.truncate(self.index + 1);
        self.entries.push(normalize_fragment(fragment));
        self.index = self.entries.len() - 1;
    }

    fn replace_fragment(&mut self, fragment: &str) {
        if let Some(entry) = self.entries.get_mut(self.index) {
            *entry = normalize_fragment(fragment);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_hash_prefix() {
        assert_eq!(normalize_fragment("#educacion").as_deref(), Some("educacion"));
        assert_eq!(normalize_fragment("#"), None);
        assert_eq!(MemoryLocation::new(Some("#perfil")).fragment(), Some("perfil"));
    }

    #[test]
    fn history_walks_back_and_forward() {
        let mut location = MemoryLocation::new(None);
        location.push_fragment("perfil");
        location.push_fragment("experiencia");
        assert!(location.back());
        assert_eq!(location.fragment(), Some("perfil"));
        assert!(location.back());
        assert_eq!(location.fragment(), None);
        assert!(!location.back());
        assert!(location.forward());
        assert_eq!(location.fragment(), Some("perfil"));
    }

    #[test]
    fn push_discards_forward_entries() {
        let mut location = MemoryLocation::new(Some("perfil"));
        location.push_fragment("experiencia");
        location.back();
        location.push_fragment("habilidades");
        assert!(!location.can_go_forward());
        assert_eq!(location.history_len(), 2);
    }

    #[test]
    fn replace_keeps_history_length() {
        let mut location = MemoryLocation::new(Some("bogus"));
        location.replace_fragment("perfil");
        assert_eq!(location.fragment(), Some("perfil"));
        assert_eq!(location.history_len(), 1);
    }
}
