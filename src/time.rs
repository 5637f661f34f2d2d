//! Fixed-timestep clock for the frame loop.
//!
//! `draw_web()` fires at display rate with uneven gaps. `SiteClock` folds
//! those gaps into whole ticks so every timer in the site (the form reset,
//! the stat-card stagger) advances in deterministic steps that tests can
//! drive without a browser.

/// Ticks per real-time second.
pub const TICKS_PER_SEC: u32 = 10;

/// Milliseconds covered by one tick.
pub const MS_PER_TICK: u32 = 1000 / TICKS_PER_SEC;

/// Longest gap fed into the accumulator, e.g. after the tab was backgrounded.
const MAX_FRAME_GAP_MS: f64 = 500.0;

/// Round a millisecond duration up to whole ticks.
pub fn ms_to_ticks(ms: u32) -> u32 {
    ms.div_ceil(MS_PER_TICK)
}

pub struct SiteClock {
    ms_per_tick: f64,
    accumulator: f64,
    pub total_ticks: u64,
    last_timestamp: Option<f64>,
}

impl SiteClock {
    pub fn new(ticks_per_sec: u32) -> Self {
        Self {
            ms_per_tick: 1000.0 / ticks_per_sec as f64,
            accumulator: 0.0,
            total_ticks: 0,
            last_timestamp: None,
        }
    }

    /// Feed a `performance.now()` timestamp; returns ticks to run this frame.
    pub fn update(&mut self, now_ms: f64) -> u32 {
        let delta = match self.last_timestamp {
            Some(prev) => (now_ms - prev).clamp(0.0, MAX_FRAME_GAP_MS),
            None => 0.0,
        };
        self.last_timestamp = Some(now_ms);

        self.accumulator += delta;
        let ticks = (self.accumulator / self.ms_per_tick) as u32;
        self.accumulator -= ticks as f64 * self.ms_per_tick;
        self.total_ticks += ticks as u64;
        ticks
    }
}

/// Current time from the browser's monotonic clock.
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}
