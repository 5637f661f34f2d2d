mod app;
mod chrome;
mod console;
mod input;
mod pages;
mod reveal;
mod time;
mod timer;
mod widgets;

use std::{cell::RefCell, io, rc::Rc};

use app::{route_for_hash, SiteApp};
use input::{pixel_x_to_col, pixel_y_to_row, ActionId, ClickState, InputEvent};
use pages::Route;
use ratzilla::event::{KeyCode, KeyEvent, MouseButton, MouseEventKind};
use ratzilla::ratatui::Terminal;
use ratzilla::{DomBackend, WebRenderer};
use time::{now_ms, SiteClock, TICKS_PER_SEC};
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;

/// First action ID used for route navigation; page-local IDs stay below it.
pub const NAV_BASE: ActionId = 1000;

/// Query the grid container's bounding rect and convert a pixel position to
/// a terminal cell.
fn dom_pixel_to_cell(mouse_x: u32, mouse_y: u32, cs: &ClickState) -> Option<(u16, u16)> {
    let window = web_sys::window()?;
    let document = window.document()?;

    // DomBackend creates a <div> as the grid container inside <body>.
    let grid = document.query_selector("body > div").ok()??;
    let rect = grid.get_bounding_client_rect();

    let col = pixel_x_to_col(mouse_x as f64 - rect.left(), rect.width(), cs.terminal_cols)?;
    let row = pixel_y_to_row(mouse_y as f64 - rect.top(), rect.height(), cs.terminal_rows)?;
    Some((col, row))
}

fn current_hash() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

/// Keep the page in step with Back/Forward and hand-edited URLs.
fn listen_for_hash_changes(app: &Rc<RefCell<SiteApp>>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let callback = Closure::<dyn Fn()>::new({
        let app = app.clone();
        move || app.borrow_mut().follow_hash(&current_hash())
    });
    if window
        .add_event_listener_with_callback("hashchange", callback.as_ref().unchecked_ref())
        .is_err()
    {
        console::warn("could not listen for hashchange");
    }
    // Lives as long as the page.
    callback.forget();
}

fn sync_hash(route: Route) {
    if let Some(window) = web_sys::window() {
        if window.location().set_hash(route.path()).is_err() {
            console::warn("could not update location hash");
        }
    }
}

fn map_key(key_event: &KeyEvent) -> Option<InputEvent> {
    Some(match key_event.code {
        KeyCode::Char(c) => InputEvent::Key(c),
        KeyCode::Backspace => InputEvent::Backspace,
        KeyCode::Enter => InputEvent::Enter,
        KeyCode::Tab if key_event.shift => InputEvent::BackTab,
        KeyCode::Tab => InputEvent::Tab,
        KeyCode::Esc => InputEvent::Esc,
        KeyCode::Up => InputEvent::Up,
        KeyCode::Down => InputEvent::Down,
        KeyCode::Left => InputEvent::Left,
        KeyCode::Right => InputEvent::Right,
        _ => return None,
    })
}

/// Forward an event to the app and keep the location hash in step with the
/// route.
fn dispatch(app: &Rc<RefCell<SiteApp>>, event: InputEvent) {
    let mut app = app.borrow_mut();
    let before = app.route();
    app.handle_input(&event);
    let after = app.route();
    if after != before {
        sync_hash(after);
    }
}

fn main() -> io::Result<()> {
    console_error_panic_hook::set_once();

    let app = Rc::new(RefCell::new(SiteApp::new(route_for_hash(&current_hash()))));
    let click_state = Rc::new(RefCell::new(ClickState::new()));
    let clock = Rc::new(RefCell::new(SiteClock::new(TICKS_PER_SEC)));
    listen_for_hash_changes(&app);
    let backend = DomBackend::new()?;
    let terminal = Terminal::new(backend)?;

    // Mouse/touch click handler
    terminal.on_mouse_event({
        let app = app.clone();
        let click_state = click_state.clone();
        move |mouse_event| {
            if mouse_event.event != MouseEventKind::Pressed
                || mouse_event.button != MouseButton::Left
            {
                return;
            }

            let cs = click_state.borrow();
            if cs.terminal_rows == 0 || cs.terminal_cols == 0 {
                return;
            }
            let action = dom_pixel_to_cell(mouse_event.x, mouse_event.y, &cs)
                .and_then(|(col, row)| cs.hit_test(col, row));
            drop(cs);

            if let Some(id) = action {
                dispatch(&app, InputEvent::Click(id));
            }
        }
    });

    // Keyboard handler
    terminal.on_key_event({
        let app = app.clone();
        move |key_event| {
            if let Some(event) = map_key(&key_event) {
                dispatch(&app, event);
            }
        }
    });

    terminal.draw_web({
        let click_state = click_state.clone();
        move |f| {
            let ticks = clock.borrow_mut().update(now_ms());
            app.borrow_mut().tick(ticks);

            let size = f.area();
            {
                let mut cs = click_state.borrow_mut();
                cs.terminal_cols = size.width;
                cs.terminal_rows = size.height;
                cs.clear_targets();
            }

            app.borrow().render(f, size, &click_state);
        }
    });

    Ok(())
}
