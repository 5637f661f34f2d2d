//! Projects: placeholder until the portfolio is published.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::Frame;

use crate::chrome::{page_block, push_footer, push_text};
use crate::input::{ClickState, InputEvent};
use crate::pages::{Page, ScrollState};
use crate::widgets::{render_scrolled, ClickableList};

pub struct ProjectsPage {
    pub scroll: ScrollState,
}

impl ProjectsPage {
    pub fn new() -> Self {
        Self {
            scroll: ScrollState::new(),
        }
    }
}

fn build_body() -> ClickableList<'static> {
    let mut cl = ClickableList::new();
    cl.blank();
    cl.push(Line::from(Span::styled(
        " Our Projects",
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )));
    cl.blank();
    push_text(&mut cl, "Content coming soon...");
    push_footer(&mut cl);
    cl
}

impl Page for ProjectsPage {
    fn handle_input(&mut self, event: &InputEvent) -> bool {
        self.scroll.handle_key(event)
    }

    fn tick(&mut self, _delta_ticks: u32) {}

    fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
        let mut cs = click_state.borrow_mut();
        let extent = render_scrolled(
            f,
            area,
            build_body(),
            page_block("Projects", area.width),
            self.scroll.offset,
            &mut cs,
        );
        self.scroll.record(extent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shows_placeholder() {
        let text: Vec<String> = build_body().into_lines().iter().map(|l| l.to_string()).collect();
        assert!(text.iter().any(|l| l.contains("Our Projects")));
        assert!(text.iter().any(|l| l.contains("Content coming soon...")));
    }
}
