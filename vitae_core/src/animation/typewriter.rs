use crate::context::MotionPreference;

/// Reveals a string one character at a time. Runs at most once: a second
/// `start` after the first is ignored.
#[derive(Debug, Clone)]
pub struct Typewriter {
    text: String,
    char_count: usize,
    char_ms: u64,
    started_at: Option<u64>,
    /// Set when motion is reduced or the text has fully appeared.
    completed: bool,
}

impl Typewriter {
    pub fn new(text: impl Into<String>, char_ms: u64, motion: MotionPreference) -> Self {
        let text = text.into();
        let char_count = text.chars().count();
        Self {
            text,
            char_count,
            char_ms,
            started_at: None,
            completed: motion.is_reduced(),
        }
    }

    /// Starts typing. Returns false when it already ran (or motion is reduced).
    pub fn start(&mut self, now_ms: u64) -> bool {
        if self.completed || self.started_at.is_some() {
            return false;
        }
        self.started_at = Some(now_ms);
        true
    }

    /// Number of characters visible at `now_ms`.
    pub fn visible_chars(&self, now_ms: u64) -> usize {
        if self.completed {
            return self.char_count;
        }
        match self.started_at {
            None => 0,
            Some(_) if self.char_ms == 0 => self.char_count,
            Some(start) => {
                let typed = (now_ms.saturating_sub(start) / self.char_ms) as usize;
                typed.min(self.char_count)
            }
        }
    }

    /// The visible prefix, always cut on a character boundary.
    pub fn visible_text(&self, now_ms: u64) -> &str {
        let n = self.visible_chars(now_ms);
        match self.text.char_indices().nth(n) {
            Some((byte, _)) => &self.text[..byte],
            None => &self.text,
        }
    }

    /// Latches completion once every character is visible.
    pub fn update(&mut self, now_ms: u64) -> bool {
        if !self.completed && self.visible_chars(now_ms) == self.char_count && self.started_at.is_some() {
            self.completed = true;
        }
        self.is_typing(now_ms)
    }

    pub fn is_typing(&self, now_ms: u64) -> bool {
        self.started_at.is_some() && !self.completed && self.visible_chars(now_ms) < self.char_count
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn types_one_char_per_interval() {
        let mut tw = Typewriter::new("Hola", 100, MotionPreference::Full);
        assert_eq!(tw.visible_text(0), "");
        assert!(tw.start(1_000));
        assert_eq!(tw.visible_text(1_000), "");
        assert_eq!(tw.visible_text(1_250), "Ho");
        assert_eq!(tw.visible_text(5_000), "Hola");
    }

    #[test]
    fn respects_multibyte_boundaries() {
        let mut tw = Typewriter::new("Educación", 10, MotionPreference::Full);
        tw.start(0);
        assert_eq!(tw.visible_text(70), "Educaci");
        assert_eq!(tw.visible_text(80), "Educació");
    }

    #[test]
    fn runs_only_once() {
        let mut tw = Typewriter::new("abc", 10, MotionPreference::Full);
        assert!(tw.start(0));
        assert!(!tw.start(5));
        tw.update(100);
        assert!(tw.is_complete());
        assert!(!tw.start(200));
    }

    #[test]
    fn reduced_motion_shows_full_text() {
        let mut tw = Typewriter::new("abc", 10, MotionPreference::Reduced);
        assert!(!tw.start(0));
        assert_eq!(tw.visible_text(0), "abc");
        assert!(tw.is_complete());
    }
}
