//! Top-level site state: the current route and its live page.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::Paragraph;
use ratzilla::ratatui::Frame;

use crate::chrome::render_nav;
use crate::console;
use crate::input::{is_narrow_layout, ClickState, InputEvent};
use crate::pages::{create_page, Page, Route};

pub struct SiteApp {
    route: Route,
    page: Box<dyn Page>,
}

impl SiteApp {
    pub fn new(route: Route) -> Self {
        Self {
            route,
            page: create_page(route),
        }
    }

    pub fn route(&self) -> Route {
        self.route
    }

    /// Swap in a fresh page for `route`. The outgoing page is torn down
    /// first so none of its timers outlive it. Navigating to the current
    /// route does nothing.
    pub fn navigate(&mut self, route: Route) {
        if route == self.route {
            return;
        }
        self.page.teardown();
        self.page = create_page(route);
        self.route = route;
        console::log(&format!("navigate: {}", route.path()));
    }

    /// The page sees every event first; clicks on route targets and the
    /// `1`-`6` hotkeys it leaves alone navigate.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        if self.page.handle_input(event) {
            return true;
        }
        let target = match event {
            InputEvent::Click(id) => Route::from_action(*id),
            InputEvent::Key(c) => Route::from_hotkey(*c),
            _ => None,
        };
        match target {
            Some(route) => {
                self.navigate(route);
                true
            }
            None => false,
        }
    }

    /// Follow a location hash change (Back/Forward, or an edited URL).
    pub fn follow_hash(&mut self, hash: &str) {
        self.navigate(route_for_hash(hash));
    }

    pub fn tick(&mut self, delta_ticks: u32) {
        if delta_ticks > 0 {
            self.page.tick(delta_ticks);
        }
    }

    /// Nav bar, page body, help line.
    pub fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(area);

        render_nav(f, chunks[0], self.route, &mut click_state.borrow_mut());
        self.page.render(f, chunks[1], click_state);
        render_help(f, chunks[2]);
    }
}

/// Route named by a location hash such as `#/contact`. Unknown paths fall
/// back to Home.
pub fn route_for_hash(hash: &str) -> Route {
    let path = hash.trim_start_matches('#');
    Route::from_path(path).unwrap_or_else(|| {
        console::warn(&format!("unknown route {:?}, showing home", path));
        Route::Home
    })
}

fn render_help(f: &mut Frame, area: Rect) {
    let text = if is_narrow_layout(area.width) {
        " 1-6 pages · j/k scroll · tap links"
    } else {
        " 1 Home · 2 About · 3 Services · 4 Investments · 5 Contact · 6 Projects  │  j/k ↑/↓ scroll · space page · g/G top/bottom"
    };
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(text, Style::default().fg(Color::DarkGray)))),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    use ratzilla::ratatui::backend::TestBackend;
    use ratzilla::ratatui::Terminal;

    struct Probe {
        torn_down: Rc<Cell<bool>>,
    }

    impl Page for Probe {
        fn handle_input(&mut self, event: &InputEvent) -> bool {
            matches!(event, InputEvent::Key('z'))
        }
        fn tick(&mut self, _delta_ticks: u32) {}
        fn render(&self, _f: &mut Frame, _area: Rect, _cs: &Rc<RefCell<ClickState>>) {}
        fn teardown(&mut self) {
            self.torn_down.set(true);
        }
    }

    fn with_probe(route: Route) -> (SiteApp, Rc<Cell<bool>>) {
        let torn_down = Rc::new(Cell::new(false));
        let app = SiteApp {
            route,
            page: Box::new(Probe {
                torn_down: torn_down.clone(),
            }),
        };
        (app, torn_down)
    }

    #[test]
    fn hotkeys_navigate() {
        let mut app = SiteApp::new(Route::Home);
        assert!(app.handle_input(&InputEvent::Key('5')));
        assert_eq!(app.route(), Route::Contact);
        assert!(app.handle_input(&InputEvent::Key('6')));
        assert_eq!(app.route(), Route::Projects);
    }

    #[test]
    fn nav_clicks_navigate() {
        let mut app = SiteApp::new(Route::Home);
        assert!(app.handle_input(&InputEvent::Click(Route::Investments.action_id())));
        assert_eq!(app.route(), Route::Investments);
    }

    #[test]
    fn page_gets_first_refusal() {
        let (mut app, _) = with_probe(Route::About);
        assert!(app.handle_input(&InputEvent::Key('z')));
        assert_eq!(app.route(), Route::About);
        assert!(!app.handle_input(&InputEvent::Key('q')));
    }

    #[test]
    fn leaving_tears_down_old_page() {
        let (mut app, torn_down) = with_probe(Route::Contact);
        app.handle_input(&InputEvent::Key('1'));
        assert!(torn_down.get());
        assert_eq!(app.route(), Route::Home);
    }

    #[test]
    fn same_route_keeps_page() {
        let (mut app, torn_down) = with_probe(Route::Contact);
        app.navigate(Route::Contact);
        assert!(!torn_down.get());
    }

    #[test]
    fn hash_resolves_routes() {
        assert_eq!(route_for_hash(""), Route::Home);
        assert_eq!(route_for_hash("#/"), Route::Home);
        assert_eq!(route_for_hash("#/investments"), Route::Investments);
        assert_eq!(route_for_hash("#/careers"), Route::Home);
    }

    #[test]
    fn hash_change_switches_page() {
        let mut app = SiteApp::new(Route::Home);
        app.handle_input(&InputEvent::Key('5'));
        assert_eq!(app.route(), Route::Contact);
        // Back button: the hash returns to the previous page.
        app.follow_hash("#/");
        assert_eq!(app.route(), Route::Home);
        app.follow_hash("#/contact");
        assert_eq!(app.route(), Route::Contact);
    }

    #[test]
    fn hash_change_tears_down_old_page() {
        let (mut app, torn_down) = with_probe(Route::Contact);
        app.follow_hash("#/contact");
        assert!(!torn_down.get());
        app.follow_hash("#/about");
        assert!(torn_down.get());
        assert_eq!(app.route(), Route::About);
    }

    #[test]
    fn render_wires_nav_and_body_targets() {
        let app = SiteApp::new(Route::Investments);
        let cs = Rc::new(RefCell::new(ClickState::new()));
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal
            .draw(|f| app.render(f, Rect::new(0, 0, 100, 40), &cs))
            .unwrap();

        // Click the CONTACT tab in the nav bar.
        let cs = cs.borrow();
        let contact = cs
            .targets
            .iter()
            .find(|t| t.action_id == Route::Contact.action_id() && t.rect.y < 3)
            .map(|t| (t.rect.x, t.rect.y));
        let (x, y) = contact.unwrap();
        assert_eq!(cs.hit_test(x, y), Some(Route::Contact.action_id()));
    }

    #[test]
    fn clicking_a_route_target_switches_page() {
        let mut app = SiteApp::new(Route::About);
        let cs = Rc::new(RefCell::new(ClickState::new()));
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal
            .draw(|f| app.render(f, Rect::new(0, 0, 100, 40), &cs))
            .unwrap();
        let hit = cs.borrow().hit_test(1, 0);
        assert_eq!(hit, Some(Route::Home.action_id()));
        if let Some(id) = hit {
            app.handle_input(&InputEvent::Click(id));
        }
        assert_eq!(app.route(), Route::Home);
    }
}
