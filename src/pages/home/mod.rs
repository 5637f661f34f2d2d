//! Home: hero, stat cards that fade in once scrolled into view, overview
//! sections.

pub mod logic;
pub mod render;
pub mod state;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::input::{ClickState, InputEvent};
use crate::pages::Page;

use state::HomeState;

pub struct HomePage {
    pub state: HomeState,
}

impl HomePage {
    pub fn new() -> Self {
        Self {
            state: HomeState::new(),
        }
    }
}

impl Page for HomePage {
    fn handle_input(&mut self, event: &InputEvent) -> bool {
        let consumed = self.state.scroll.handle_key(event);
        if consumed {
            logic::observe(&mut self.state);
        }
        consumed
    }

    fn tick(&mut self, delta_ticks: u32) {
        logic::tick(&mut self.state, delta_ticks);
    }

    fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
        render::render(&self.state, f, area, click_state);
    }

    fn teardown(&mut self) {
        logic::teardown(&mut self.state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratzilla::ratatui::backend::TestBackend;
    use ratzilla::ratatui::Terminal;

    fn draw(page: &HomePage, height: u16) {
        let cs = Rc::new(RefCell::new(ClickState::new()));
        let mut terminal = Terminal::new(TestBackend::new(100, height)).unwrap();
        terminal
            .draw(|f| page.render(f, Rect::new(0, 0, 100, height), &cs))
            .unwrap();
    }

    #[test]
    fn tall_viewport_reveals_on_first_tick() {
        let mut page = HomePage::new();
        draw(&page, 200);
        assert!(page.state.reveal.is_observing());
        page.tick(1);
        assert_eq!(page.state.reveal_elapsed_ms, Some(0));
        page.tick(10);
        draw(&page, 200);
        assert_eq!(page.state.reveal_elapsed_ms, Some(1000));
    }

    #[test]
    fn short_viewport_reveals_after_scrolling() {
        let mut page = HomePage::new();
        draw(&page, 8);
        page.tick(1);
        assert_eq!(page.state.reveal_elapsed_ms, None);

        let (start, _) = page.state.stats_rows.get();
        while page.state.scroll.offset < start && page.state.reveal_elapsed_ms.is_none() {
            assert!(page.handle_input(&InputEvent::Down));
        }
        assert!(page.state.reveal.has_fired());
    }

    #[test]
    fn left_for_navigation() {
        let mut page = HomePage::new();
        assert!(!page.handle_input(&InputEvent::Key('3')));
        assert!(!page.handle_input(&InputEvent::Enter));
    }

    #[test]
    fn leaving_page_disconnects_observer() {
        let mut page = HomePage::new();
        page.teardown();
        draw(&page, 200);
        page.tick(1);
        assert_eq!(page.state.reveal_elapsed_ms, None);
    }
}
