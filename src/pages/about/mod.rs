//! About: vision, mission, story, lifecycle, impact.

pub mod render;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::input::{ClickState, InputEvent};
use crate::pages::{Page, ScrollState};

pub struct AboutPage {
    pub scroll: ScrollState,
}

impl AboutPage {
    pub fn new() -> Self {
        Self {
            scroll: ScrollState::new(),
        }
    }
}

impl Page for AboutPage {
    fn handle_input(&mut self, event: &InputEvent) -> bool {
        self.scroll.handle_key(event)
    }

    fn tick(&mut self, _delta_ticks: u32) {}

    fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
        render::render(&self.scroll, f, area, click_state);
    }
}
