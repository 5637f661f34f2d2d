//! Services: the four service lines, asset management, our approach.

pub mod render;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::input::{ClickState, InputEvent};
use crate::pages::{Page, ScrollState};

pub struct ServicesPage {
    pub scroll: ScrollState,
}

impl ServicesPage {
    pub fn new() -> Self {
        Self {
            scroll: ScrollState::new(),
        }
    }
}

impl Page for ServicesPage {
    fn handle_input(&mut self, event: &InputEvent) -> bool {
        self.scroll.handle_key(event)
    }

    fn tick(&mut self, _delta_ticks: u32) {}

    fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
        render::render(&self.scroll, f, area, click_state);
    }
}
