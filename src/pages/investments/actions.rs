//! Semantic action IDs for Investments page click targets.

pub const FILTER_BASE: u16 = 10; // + FilterSelection::index()
