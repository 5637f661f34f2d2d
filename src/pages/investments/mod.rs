//! Investments page: the fund vehicle and the filterable project pipeline.

pub mod actions;
pub mod catalog;
pub mod logic;
pub mod render;
pub mod state;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::input::{ClickState, InputEvent};
use crate::pages::Page;

use actions::FILTER_BASE;
use state::{FilterSelection, InvestmentsState};

pub struct InvestmentsPage {
    pub state: InvestmentsState,
}

impl InvestmentsPage {
    pub fn new() -> Self {
        Self {
            state: InvestmentsState::new(),
        }
    }

    fn cycle_filter(&mut self, step: i32) {
        let n = FilterSelection::ALL.len() as i32;
        let next = (self.state.selection.index() as i32 + step).rem_euclid(n);
        if let Some(s) = FilterSelection::from_index(next as u16) {
            self.state.select(s);
        }
    }
}

impl Page for InvestmentsPage {
    fn handle_input(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Click(id) if *id >= FILTER_BASE => {
                match FilterSelection::from_index(*id - FILTER_BASE) {
                    Some(s) => {
                        self.state.select(s);
                        true
                    }
                    None => false,
                }
            }
            InputEvent::Key('a') => {
                self.state.select(FilterSelection::All);
                true
            }
            InputEvent::Key('r') => {
                self.state.select(FilterSelection::Vetted);
                true
            }
            InputEvent::Key('d') => {
                self.state.select(FilterSelection::Active);
                true
            }
            InputEvent::Key('c') => {
                self.state.select(FilterSelection::Featured);
                true
            }
            InputEvent::Right | InputEvent::Tab => {
                self.cycle_filter(1);
                true
            }
            InputEvent::Left | InputEvent::BackTab => {
                self.cycle_filter(-1);
                true
            }
            other => self.state.scroll.handle_key(other),
        }
    }

    fn tick(&mut self, _delta_ticks: u32) {}

    fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
        render::render(&self.state, f, area, click_state);
    }
}
