use tracing::trace;

use crate::utils::rate_limit::Throttle;

/// Vertical extent of a section in page coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f32,
    pub bottom: f32,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f32, bottom: f32) -> Self {
        Self {
            id: id.into(),
            top,
            bottom,
        }
    }

    pub fn contains(&self, y: f32) -> bool {
        y >= self.top && y < self.bottom
    }
}

/// Maps throttled scroll offsets to the section under the reading line.
///
/// After an explicit navigation the spy is muted for a cooldown, so the
/// scroll that navigation causes cannot fight the chosen section.
#[derive(Debug, Clone)]
pub struct ScrollSpy {
    lookahead: f32,
    cooldown_ms: u64,
    muted_until: u64,
    throttle: Throttle<(f32, u64)>,
    bounds: Vec<SectionBounds>,
    current: Option<String>,
}

impl ScrollSpy {
    pub fn new(lookahead: f32, throttle_ms: u64, cooldown_ms: u64) -> Self {
        Self {
            lookahead,
            cooldown_ms,
            muted_until: 0,
            throttle: Throttle::new(throttle_ms),
            bounds: Vec::new(),
            current: None,
        }
    }

    pub fn set_layout(&mut self, bounds: Vec<SectionBounds>) {
        self.bounds = bounds;
    }

    /// Mutes the spy after an explicit navigation and adopts its target.
    pub fn suppress(&mut self, id: &str, now_ms: u64) {
        self.muted_until = now_ms + self.cooldown_ms;
        self.current = Some(id.to_string());
    }

    pub fn is_muted(&self, now_ms: u64) -> bool {
        now_ms < self.muted_until
    }

    /// Section whose bounds contain `offset + lookahead`.
    pub fn locate(&self, offset: f32) -> Option<&str> {
        let probe = offset + self.lookahead;
        self.bounds
            .iter()
            .find(|b| b.contains(probe))
            .map(|b| b.id.as_str())
    }

    /// Feeds a raw scroll sample. Returns a newly highlighted section.
    pub fn sample(&mut self, offset: f32, now_ms: u64) -> Option<String> {
        let (offset, at) = self.throttle.offer((offset, now_ms), now_ms)?;
        self.evaluate(offset, at)
    }

    /// Releases the trailing sample once its throttle window has passed.
    pub fn flush(&mut self, now_ms: u64) -> Option<String> {
        let (offset, at) = self.throttle.flush(now_ms)?;
        self.evaluate(offset, at)
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn has_pending(&self) -> bool {
        self.throttle.has_pending()
    }

    fn evaluate(&mut self, offset: f32, sampled_at: u64) -> Option<String> {
        if self.is_muted(sampled_at) {
            trace!(offset, "scroll sample during navigation cooldown");
            return None;
        }
        let found = self.locate(offset)?.to_string();
        if self.current.as_deref() == Some(found.as_str()) {
            return None;
        }
        self.current = Some(found.clone());
        Some(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spy() -> ScrollSpy {
        let mut spy = ScrollSpy::new(100.0, 100, 800);
        spy.set_layout(vec![
            SectionBounds::new("perfil", 0.0, 500.0),
            SectionBounds::new("experiencia", 500.0, 1200.0),
            SectionBounds::new("educacion", 1200.0, 1600.0),
        ]);
        spy
    }

    #[test]
    fn uses_lookahead() {
        let spy = spy();
        assert_eq!(spy.locate(0.0), Some("perfil"));
        assert_eq!(spy.locate(400.0), Some("experiencia"));
        assert_eq!(spy.locate(5_000.0), None);
    }

    #[test]
    fn reports_only_changes() {
        let mut spy = spy();
        assert_eq!(spy.sample(0.0, 0).as_deref(), Some("perfil"));
        assert_eq!(spy.sample(50.0, 200), None);
        assert_eq!(spy.sample(450.0, 400).as_deref(), Some("experiencia"));
    }

    #[test]
    fn trailing_sample_is_flushed() {
        let mut spy = spy();
        spy.sample(0.0, 0);
        assert_eq!(spy.sample(1_150.0, 20), None);
        assert_eq!(spy.flush(120).as_deref(), Some("educacion"));
    }

    #[test]
    fn explicit_navigation_mutes_spy() {
        let mut spy = spy();
        spy.suppress("educacion", 1_000);
        assert_eq!(spy.sample(0.0, 1_100), None);
        assert_eq!(spy.current(), Some("educacion"));
        assert_eq!(spy.sample(0.0, 1_900).as_deref(), Some("perfil"));
    }
}
