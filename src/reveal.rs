//! Visibility-triggered, fire-once observer.
//!
//! The terminal has no IntersectionObserver, so the owning page reports how
//! much of a watched region is inside the viewport after every scroll or
//! resize and the trigger decides whether that counts as the first crossing.

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Observing,
    Fired,
    Disconnected,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevealTrigger {
    threshold: f64,
    phase: Phase,
}

impl RevealTrigger {
    /// Start observing; fires when at least `threshold` (0.0..=1.0) of the
    /// region is visible.
    pub fn observe(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            phase: Phase::Observing,
        }
    }

    /// Report the currently visible fraction. Returns `true` only on the
    /// first report that reaches the threshold; observation stops there.
    pub fn report(&mut self, visible_fraction: f64) -> bool {
        if self.phase != Phase::Observing {
            return false;
        }
        if visible_fraction > 0.0 && visible_fraction >= self.threshold {
            self.phase = Phase::Fired;
            return true;
        }
        false
    }

    #[cfg(test)]
    pub fn has_fired(&self) -> bool {
        self.phase == Phase::Fired
    }

    /// Stop observing for good (page teardown).
    pub fn disconnect(&mut self) {
        if self.phase == Phase::Observing {
            self.phase = Phase::Disconnected;
        }
    }

    pub fn is_observing(&self) -> bool {
        self.phase == Phase::Observing
    }
}

/// Fraction of the rows `[start, end)` that fall inside the viewport
/// `[scroll, scroll + viewport_rows)`.
pub fn visible_fraction(start: u16, end: u16, scroll: u16, viewport_rows: u16) -> f64 {
    if end <= start || viewport_rows == 0 {
        return 0.0;
    }
    let view_end = scroll.saturating_add(viewport_rows);
    let top = start.max(scroll);
    let bottom = end.min(view_end);
    if bottom <= top {
        return 0.0;
    }
    (bottom - top) as f64 / (end - start) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_on_first_crossing_only() {
        let mut r = RevealTrigger::observe(0.3);
        assert!(!r.report(0.1));
        assert!(r.report(0.5));
        assert!(r.has_fired());
        assert!(!r.report(1.0));
        assert!(!r.is_observing());
    }

    #[test]
    fn exact_threshold_counts() {
        let mut r = RevealTrigger::observe(0.3);
        assert!(r.report(0.3));
    }

    #[test]
    fn zero_threshold_still_needs_some_visibility() {
        let mut r = RevealTrigger::observe(0.0);
        assert!(!r.report(0.0));
        assert!(r.report(0.01));
    }

    #[test]
    fn disconnected_trigger_stays_silent() {
        let mut r = RevealTrigger::observe(0.3);
        r.disconnect();
        assert!(!r.report(1.0));
        assert!(!r.has_fired());
    }

    #[test]
    fn disconnect_after_fire_keeps_fired() {
        let mut r = RevealTrigger::observe(0.3);
        r.report(1.0);
        r.disconnect();
        assert!(r.has_fired());
    }

    #[test]
    fn visible_fraction_cases() {
        // Section rows 20..30.
        assert_eq!(visible_fraction(20, 30, 0, 10), 0.0);
        assert_eq!(visible_fraction(20, 30, 0, 23), 0.3);
        assert_eq!(visible_fraction(20, 30, 0, 40), 1.0);
        assert_eq!(visible_fraction(20, 30, 25, 40), 0.5);
        assert_eq!(visible_fraction(20, 30, 30, 40), 0.0);
        assert_eq!(visible_fraction(20, 20, 0, 40), 0.0);
        assert_eq!(visible_fraction(20, 30, 0, 0), 0.0);
    }
}
