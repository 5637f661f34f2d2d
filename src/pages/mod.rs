//! Page trait, routes, and the scroll state every page body shares.

pub mod about;
pub mod contact;
pub mod home;
pub mod investments;
pub mod projects;
pub mod services;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::input::{ActionId, ClickState, InputEvent};
use crate::widgets::ScrollExtent;
use crate::NAV_BASE;

/// Trait that every page implements.
pub trait Page {
    /// Handle an input event. Returns true if the event was consumed; the app
    /// handles navigation for anything the page leaves alone.
    fn handle_input(&mut self, event: &InputEvent) -> bool;

    /// Advance timers by `delta_ticks` discrete ticks.
    fn tick(&mut self, delta_ticks: u32);

    /// Render the page body into the given area.
    fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>);

    /// Called once before the page is dropped on navigation. Pending timers
    /// and observers must be cancelled here.
    fn teardown(&mut self) {}
}

/// Logical pages of the site.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    Services,
    Investments,
    Contact,
    Projects,
}

impl Route {
    pub const ALL: [Route; 6] = [
        Route::Home,
        Route::About,
        Route::Services,
        Route::Investments,
        Route::Contact,
        Route::Projects,
    ];

    /// Routes listed in the navigation bar (Projects is reachable by link only).
    pub const NAV: [Route; 5] = [
        Route::Home,
        Route::About,
        Route::Services,
        Route::Investments,
        Route::Contact,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Services => "/services",
            Route::Investments => "/investments",
            Route::Contact => "/contact",
            Route::Projects => "/projects",
        }
    }

    /// Resolve a logical path. Trailing slashes are tolerated; anything
    /// unknown is `None`.
    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = path.trim();
        let normalized = if trimmed.len() > 1 {
            trimmed.trim_end_matches('/')
        } else {
            trimmed
        };
        let normalized = if normalized.is_empty() { "/" } else { normalized };
        Route::ALL.into_iter().find(|r| r.path() == normalized)
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            Route::Home => "HOME",
            Route::About => "ABOUT",
            Route::Services => "SERVICES",
            Route::Investments => "INVESTMENTS",
            Route::Contact => "CONTACT",
            Route::Projects => "PROJECTS",
        }
    }

    pub fn index(self) -> u16 {
        match self {
            Route::Home => 0,
            Route::About => 1,
            Route::Services => 2,
            Route::Investments => 3,
            Route::Contact => 4,
            Route::Projects => 5,
        }
    }

    /// Click action that navigates here.
    pub fn action_id(self) -> ActionId {
        NAV_BASE + self.index()
    }

    pub fn from_action(id: ActionId) -> Option<Route> {
        let idx = id.checked_sub(NAV_BASE)?;
        Route::ALL.into_iter().find(|r| r.index() == idx)
    }

    /// Keyboard shortcut `'1'..='6'`.
    pub fn hotkey(self) -> char {
        (b'1' + self.index() as u8) as char
    }

    pub fn from_hotkey(c: char) -> Option<Route> {
        Route::ALL.into_iter().find(|r| r.hotkey() == c)
    }
}

/// Create a page instance for a route.
pub fn create_page(route: Route) -> Box<dyn Page> {
    match route {
        Route::Home => Box::new(home::HomePage::new()),
        Route::About => Box::new(about::AboutPage::new()),
        Route::Services => Box::new(services::ServicesPage::new()),
        Route::Investments => Box::new(investments::InvestmentsPage::new()),
        Route::Contact => Box::new(contact::ContactPage::new()),
        Route::Projects => Box::new(projects::ProjectsPage::new()),
    }
}

// ── Scroll ─────────────────────────────────────────────────────

/// Vertical scroll position of a page body.
///
/// The extent is only known after a render, so it is kept in a `Cell` that
/// the read-only render pass updates and the next input clamps against.
#[derive(Debug, Default)]
pub struct ScrollState {
    pub offset: u16,
    extent: Cell<ScrollExtent>,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, extent: ScrollExtent) {
        self.extent.set(extent);
    }

    pub fn extent(&self) -> ScrollExtent {
        self.extent.get()
    }

    pub fn max_offset(&self) -> u16 {
        let e = self.extent.get();
        e.content_rows.saturating_sub(e.viewport_rows)
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let next = (self.offset as i32 + delta).clamp(0, self.max_offset() as i32);
        self.offset = next as u16;
    }

    /// Scroll the least amount that brings visual row `row` into view.
    pub fn ensure_visible(&mut self, row: u16) {
        let viewport = self.extent.get().viewport_rows;
        if viewport == 0 {
            return;
        }
        if row < self.offset {
            self.offset = row;
        } else if row >= self.offset + viewport {
            self.offset = (row + 1 - viewport).min(self.max_offset());
        }
    }

    /// j/k and arrow scrolling, space for a page down.
    pub fn handle_key(&mut self, event: &InputEvent) -> bool {
        let page = self.extent.get().viewport_rows.saturating_sub(2).max(1) as i32;
        match event {
            InputEvent::Key('j') | InputEvent::Down => self.scroll_by(1),
            InputEvent::Key('k') | InputEvent::Up => self.scroll_by(-1),
            InputEvent::Key(' ') => self.scroll_by(page),
            InputEvent::Key('g') => self.offset = 0,
            InputEvent::Key('G') => self.offset = self.max_offset(),
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn path_normalization() {
        assert_eq!(Route::from_path(""), Some(Route::Home));
        assert_eq!(Route::from_path("/contact/"), Some(Route::Contact));
        assert_eq!(Route::from_path(" /about "), Some(Route::About));
        assert_eq!(Route::from_path("/careers"), None);
        assert_eq!(Route::from_path("contact"), None);
    }

    #[test]
    fn nav_excludes_projects() {
        assert!(!Route::NAV.contains(&Route::Projects));
        assert_eq!(Route::NAV.len(), 5);
    }

    #[test]
    fn action_ids_map_back_to_routes() {
        for route in Route::ALL {
            assert_eq!(Route::from_action(route.action_id()), Some(route));
        }
        assert_eq!(Route::from_action(NAV_BASE - 1), None);
        assert_eq!(Route::from_action(NAV_BASE + 6), None);
    }

    #[test]
    fn hotkeys() {
        assert_eq!(Route::Home.hotkey(), '1');
        assert_eq!(Route::Projects.hotkey(), '6');
        assert_eq!(Route::from_hotkey('4'), Some(Route::Investments));
        assert_eq!(Route::from_hotkey('7'), None);
    }

    #[test]
    fn scroll_clamps_to_extent() {
        let mut s = ScrollState::new();
        s.record(ScrollExtent {
            content_rows: 50,
            viewport_rows: 20,
        });
        s.scroll_by(-3);
        assert_eq!(s.offset, 0);
        s.scroll_by(100);
        assert_eq!(s.offset, 30);
        assert!(s.handle_key(&InputEvent::Key('k')));
        assert_eq!(s.offset, 29);
        assert!(s.handle_key(&InputEvent::Key('g')));
        assert_eq!(s.offset, 0);
        assert!(s.handle_key(&InputEvent::Key(' ')));
        assert_eq!(s.offset, 18);
        assert!(!s.handle_key(&InputEvent::Key('x')));
    }

    #[test]
    fn ensure_visible_scrolls_minimally() {
        let mut s = ScrollState::new();
        s.record(ScrollExtent {
            content_rows: 100,
            viewport_rows: 10,
        });
        s.ensure_visible(5);
        assert_eq!(s.offset, 0);
        s.ensure_visible(25);
        assert_eq!(s.offset, 16);
        s.ensure_visible(20);
        assert_eq!(s.offset, 16);
        s.ensure_visible(3);
        assert_eq!(s.offset, 3);
    }

    #[test]
    fn scroll_before_first_render_stays_put() {
        let mut s = ScrollState::new();
        assert!(s.handle_key(&InputEvent::Down));
        assert_eq!(s.offset, 0);
    }
}
