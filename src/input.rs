//! Input normalization and click-target hit testing.
//!
//! Keyboard, mouse and touch all arrive here as [`InputEvent`]s. Pages never
//! see pixels: the render pass registers rectangular targets in terminal
//! cells, and the mouse handler turns a pixel position into a cell and then
//! into the semantic action ID of whatever was drawn there.

use ratzilla::ratatui::layout::Rect;

/// Semantic action identifier attached to a click target.
///
/// Page-local IDs live below [`crate::NAV_BASE`]; the chrome (nav bar and
/// footer links) uses IDs at or above it.
pub type ActionId = u16;

/// Every input the site reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A printable character.
    Key(char),
    Backspace,
    Enter,
    Tab,
    BackTab,
    Esc,
    Up,
    Down,
    Left,
    Right,
    /// A click/tap resolved to a registered target.
    Click(ActionId),
}

/// A tappable region in terminal cell coordinates.
#[derive(Debug, Clone)]
pub struct ClickTarget {
    pub rect: Rect,
    pub action_id: ActionId,
}

/// Targets registered by the last frame, plus the grid size they refer to.
///
/// Rebuilt from scratch on every draw so it always matches what is on screen.
pub struct ClickState {
    pub targets: Vec<ClickTarget>,
    pub terminal_cols: u16,
    pub terminal_rows: u16,
}

impl ClickState {
    pub fn new() -> Self {
        Self {
            targets: Vec::new(),
            terminal_cols: 0,
            terminal_rows: 0,
        }
    }

    pub fn clear_targets(&mut self) {
        self.targets.clear();
    }

    pub fn add_click_target(&mut self, rect: Rect, action_id: ActionId) {
        if rect.width == 0 || rect.height == 0 {
            return;
        }
        self.targets.push(ClickTarget { rect, action_id });
    }

    /// Register one full-width row of `area`. Rows outside `area` are ignored,
    /// which is what clips targets of scrolled-away content.
    pub fn add_row_target(&mut self, area: Rect, row: u16, action_id: ActionId) {
        if row >= area.y && row < area.y + area.height {
            self.add_click_target(Rect::new(area.x, row, area.width, 1), action_id);
        }
    }

    /// Register targets for a horizontal bar of labels (nav items, filter
    /// buttons) laid out left to right.
    ///
    /// `label_widths` holds `(display_width, action_id)` per padded label.
    /// Each target spans its label plus half of each neighbouring separator;
    /// the first one reaches the left edge and the last one the right edge,
    /// so a tap anywhere on the bar lands on the nearest label.
    pub fn register_bar_targets(
        &mut self,
        label_widths: &[(u16, ActionId)],
        separator_width: u16,
        x: u16,
        y: u16,
        total_width: u16,
        height: u16,
    ) {
        let n = label_widths.len();
        if n == 0 || total_width == 0 {
            return;
        }

        let mut starts: Vec<u16> = Vec::with_capacity(n);
        let mut cursor: u16 = 0;
        for (i, &(w, _)) in label_widths.iter().enumerate() {
            if i > 0 {
                cursor += separator_width;
            }
            starts.push(cursor);
            cursor += w;
        }

        for i in 0..n {
            let (_, action_id) = label_widths[i];

            let left = if i == 0 {
                0
            } else {
                let prev_end = starts[i - 1] + label_widths[i - 1].0;
                prev_end + (starts[i] - prev_end) / 2
            };

            let right = if i == n - 1 {
                total_width.max(starts[i] + label_widths[i].0)
            } else {
                let cur_end = starts[i] + label_widths[i].0;
                cur_end + (starts[i + 1] - cur_end) / 2
            };

            let w = right.saturating_sub(left);
            if w > 0 {
                self.add_click_target(Rect::new(x + left, y, w, height), action_id);
            }
        }
    }

    /// Action under the given cell. Later registrations sit on top, so they
    /// win where targets overlap.
    pub fn hit_test(&self, col: u16, row: u16) -> Option<ActionId> {
        self.targets.iter().rev().find_map(|t| {
            let r = &t.rect;
            if col >= r.x && col < r.x + r.width && row >= r.y && row < r.y + r.height {
                Some(t.action_id)
            } else {
                None
            }
        })
    }
}

/// Screens narrower than this many columns get the stacked mobile layout.
pub fn is_narrow_layout(width: u16) -> bool {
    width < 60
}

/// Map a pixel offset (relative to the grid's top edge) to a terminal row.
pub fn pixel_y_to_row(click_y: f64, grid_height: f64, terminal_rows: u16) -> Option<u16> {
    if grid_height <= 0.0 || terminal_rows == 0 || click_y < 0.0 {
        return None;
    }
    let cell_height = grid_height / terminal_rows as f64;
    let row = (click_y / cell_height) as u16;
    if row >= terminal_rows {
        None
    } else {
        Some(row)
    }
}

/// Map a pixel offset (relative to the grid's left edge) to a terminal column.
pub fn pixel_x_to_col(click_x: f64, grid_width: f64, terminal_cols: u16) -> Option<u16> {
    if grid_width <= 0.0 || terminal_cols == 0 || click_x < 0.0 {
        return None;
    }
    let cell_width = grid_width / terminal_cols as f64;
    let col = (click_x / cell_width) as u16;
    if col >= terminal_cols {
        None
    } else {
        Some(col)
    }
}
