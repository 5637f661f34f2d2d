//! Pure home-page logic: reveal observation and card entrance timing.

use super::state::{CardPhase, HomeState, FADE_MS};
use crate::reveal::visible_fraction;
use crate::time::MS_PER_TICK;

/// Report the stats section's current visibility to the trigger. Starts the
/// entrance clock the first time the threshold is crossed.
pub fn observe(state: &mut HomeState) {
    let (start, end) = state.stats_rows.get();
    let viewport = state.scroll.extent().viewport_rows;
    let offset = state.scroll.offset.min(state.scroll.max_offset());
    let fraction = visible_fraction(start, end, offset, viewport);
    if state.reveal.report(fraction) {
        state.reveal_elapsed_ms = Some(0);
    }
}

pub fn tick(state: &mut HomeState, delta_ticks: u32) {
    if let Some(elapsed) = state.reveal_elapsed_ms.as_mut() {
        *elapsed = elapsed.saturating_add(delta_ticks.saturating_mul(MS_PER_TICK));
    }
    if state.reveal.is_observing() {
        observe(state);
    }
}

pub fn teardown(state: &mut HomeState) {
    state.reveal.disconnect();
}

/// Phase of a card that starts `delay_ms` after the reveal.
pub fn card_phase(reveal_elapsed_ms: Option<u32>, delay_ms: u32) -> CardPhase {
    match reveal_elapsed_ms {
        None => CardPhase::Hidden,
        Some(e) if e < delay_ms => CardPhase::Hidden,
        Some(e) if e - delay_ms >= FADE_MS => CardPhase::Shown,
        Some(e) => CardPhase::Fading(e - delay_ms),
    }
}
