//! Reusable clickable UI components.
//!
//! Each component renders and registers its own click targets, so what is
//! drawn and what is tappable cannot drift apart.
//!
//! - [`TabBar`]: one row of labelled buttons (nav bar, filter bar).
//! - [`ClickableList`]: lines of text, some bound to actions.
//! - [`render_scrolled`]: draws a `ClickableList` as a scrollable page body.

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::style::{Color, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::input::{ActionId, ClickState};

// ── TabBar ─────────────────────────────────────────────────────

/// A horizontal bar of labelled buttons.
///
/// ```ignore
/// TabBar::new(" │ ")
///     .tab("HOME", style_for(Route::Home), NAV_BASE)
///     .tab("ABOUT", style_for(Route::About), NAV_BASE + 1)
///     .render(f, area, &mut cs);
/// ```
pub struct TabBar<'a> {
    tabs: Vec<(String, Style, ActionId)>,
    separator: &'a str,
    block: Option<Block<'a>>,
}

impl<'a> TabBar<'a> {
    pub fn new(separator: &'a str) -> Self {
        Self {
            tabs: Vec::new(),
            separator,
            block: None,
        }
    }

    pub fn tab(mut self, label: impl Into<String>, style: Style, action_id: ActionId) -> Self {
        self.tabs.push((label.into(), style, action_id));
        self
    }

    /// Wrap the bar in a [`Block`]; targets are laid out in `Block::inner()`.
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    pub fn render(self, f: &mut Frame, area: Rect, cs: &mut ClickState) {
        let mut spans: Vec<Span> = Vec::new();
        let sep_width = Line::from(self.separator).width() as u16;
        let mut label_widths: Vec<(u16, ActionId)> = Vec::new();

        for (i, (label, style, action_id)) in self.tabs.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(
                    self.separator,
                    Style::default().fg(Color::DarkGray),
                ));
            }
            let padded = format!(" {} ", label);
            label_widths.push((Line::from(padded.as_str()).width() as u16, *action_id));
            spans.push(Span::styled(padded, *style));
        }

        let inner = match &self.block {
            Some(block) => block.inner(area),
            None => area,
        };

        let line = Line::from(spans);
        let paragraph = match self.block {
            Some(block) => Paragraph::new(line).block(block),
            None => Paragraph::new(line),
        };
        f.render_widget(paragraph, area);

        // Inner x/width for horizontal accuracy, outer y/height so the
        // whole bar (borders included) stays tappable.
        cs.register_bar_targets(
            &label_widths,
            sep_width,
            inner.x,
            area.y,
            inner.width,
            area.height.max(1),
        );
    }
}

// ── ClickableList ──────────────────────────────────────────────

/// Lines of content, some of which are bound to actions.
///
/// The action follows its line: inserting copy above a link moves the link's
/// target with it.
pub struct ClickableList<'a> {
    lines: Vec<Line<'a>>,
    /// `(line_index, action_id)`
    actions: Vec<(u16, ActionId)>,
}

impl<'a> ClickableList<'a> {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            actions: Vec::new(),
        }
    }

    pub fn push(&mut self, line: Line<'a>) {
        self.lines.push(line);
    }

    pub fn push_clickable(&mut self, line: Line<'a>, action_id: ActionId) {
        let idx = self.lines.len() as u16;
        self.actions.push((idx, action_id));
        self.lines.push(line);
    }

    pub fn blank(&mut self) {
        self.lines.push(Line::from(""));
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn into_lines(self) -> Vec<Line<'a>> {
        self.lines
    }

    /// Visual rows each logical line occupies when wrapped to `width`.
    /// A width of 0 means no wrapping: one row per line.
    pub fn visual_heights(&self, width: u16) -> Vec<u16> {
        self.lines
            .iter()
            .map(|line| {
                if width == 0 {
                    1
                } else {
                    Paragraph::new(line.clone())
                        .wrap(Wrap { trim: false })
                        .line_count(width)
                        .max(1) as u16
                }
            })
            .collect()
    }

    /// Total visual rows when wrapped to `width`.
    pub fn visual_height(&self, width: u16) -> u16 {
        self.visual_heights(width).iter().sum()
    }

    /// First visual row of logical line `index` when wrapped to `width`.
    pub fn visual_row_of(&self, index: usize, width: u16) -> u16 {
        self.visual_heights(width).iter().take(index).sum()
    }

    /// Register click targets for every clickable line.
    ///
    /// * `top_offset` / `bottom_offset`: rows of border around the content.
    /// * `scroll`: vertical scroll in visual rows.
    /// * `inner_width`: wrap width; `0` when the widget does not wrap.
    pub fn register_targets(
        &self,
        area: Rect,
        cs: &mut ClickState,
        top_offset: u16,
        bottom_offset: u16,
        scroll: u16,
        inner_width: u16,
    ) {
        let content_y = area.y + top_offset;
        let content_end = area.y + area.height.saturating_sub(bottom_offset);

        let heights = self.visual_heights(inner_width);
        let mut starts: Vec<u16> = Vec::with_capacity(heights.len());
        let mut cumulative: u16 = 0;
        for h in &heights {
            starts.push(cumulative);
            cumulative += h;
        }

        for &(line_idx, action_id) in &self.actions {
            let li = line_idx as usize;
            if li >= self.lines.len() {
                continue;
            }
            for r in 0..heights[li] {
                let vr = starts[li] + r;
                if vr < scroll {
                    continue;
                }
                let screen_row = content_y + (vr - scroll);
                if screen_row >= content_end {
                    break;
                }
                cs.add_row_target(area, screen_row, action_id);
            }
        }
    }
}

// ── Scrollable body ────────────────────────────────────────────

/// Extent of a rendered scrollable body, reported back to the page so the
/// next scroll input can be clamped.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollExtent {
    pub content_rows: u16,
    pub viewport_rows: u16,
}

/// Render `cl` inside `block` with wrapping and a vertical scroll offset.
pub fn render_scrolled(
    f: &mut Frame,
    area: Rect,
    cl: ClickableList,
    block: Block,
    scroll: u16,
    cs: &mut ClickState,
) -> ScrollExtent {
    let inner = block.inner(area);
    let top = inner.y.saturating_sub(area.y);
    let bottom = (area.y + area.height).saturating_sub(inner.y + inner.height);
    let content_rows = cl.visual_height(inner.width);
    let scroll = scroll.min(content_rows.saturating_sub(inner.height));

    cl.register_targets(area, cs, top, bottom, scroll, inner.width);

    let widget = Paragraph::new(cl.into_lines())
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    f.render_widget(widget, area);

    ScrollExtent {
        content_rows,
        viewport_rows: inner.height,
    }
}
