//! Click action IDs for the contact page.

/// Focus (or toggle/cycle) a form field: `FOCUS_BASE + Field::index()`.
pub const FOCUS_BASE: u16 = 10;
/// Pick an inquiry type: `OPTION_BASE + InquiryType::index()`.
pub const OPTION_BASE: u16 = 20;
pub const SEND: u16 = 30;
