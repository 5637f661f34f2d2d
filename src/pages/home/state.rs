//! Home page state: scroll position and the stat-card reveal.

use std::cell::Cell;

use crate::pages::ScrollState;
use crate::reveal::RevealTrigger;

/// Share of the stats section that must be on screen before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.3;

/// Per-card start offsets after the reveal fires.
pub const STAT_DELAYS_MS: [u32; 4] = [0, 100, 200, 300];

/// Length of one card's fade-in.
pub const FADE_MS: u32 = 700;

pub struct HomeState {
    pub scroll: ScrollState,
    pub reveal: RevealTrigger,
    /// Milliseconds since the reveal fired; `None` until it does.
    pub reveal_elapsed_ms: Option<u32>,
    /// Visual rows `[start, end)` of the stats section in the last render.
    pub stats_rows: Cell<(u16, u16)>,
}

impl HomeState {
    pub fn new() -> Self {
        Self {
            scroll: ScrollState::new(),
            reveal: RevealTrigger::observe(REVEAL_THRESHOLD),
            reveal_elapsed_ms: None,
            stats_rows: Cell::new((0, 0)),
        }
    }
}

/// Where one stat card is in its entrance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardPhase {
    Hidden,
    /// Milliseconds into the fade.
    Fading(u32),
    Shown,
}
