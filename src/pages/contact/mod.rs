//! Contact: contact details, the inquiry form, FAQ.

pub mod actions;
pub mod delivery;
pub mod logic;
pub mod render;
pub mod state;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::input::{ClickState, InputEvent};
use crate::pages::Page;

use actions::{FOCUS_BASE, OPTION_BASE, SEND};
use delivery::{ConsoleDelivery, InquiryDelivery};
use logic::SubmitError;
use state::{ContactState, Field, Focus, InquiryType};

pub struct ContactPage {
    pub state: ContactState,
    delivery: Box<dyn InquiryDelivery>,
}

impl ContactPage {
    pub fn new() -> Self {
        Self::with_delivery(Box::new(ConsoleDelivery))
    }

    pub fn with_delivery(delivery: Box<dyn InquiryDelivery>) -> Self {
        Self {
            state: ContactState::new(),
            delivery,
        }
    }

    fn submit(&mut self) {
        let result = logic::submit(&mut self.state, self.delivery.as_mut());
        self.after_submit(result);
    }

    fn after_submit(&mut self, result: Result<(), SubmitError>) {
        if let Err(SubmitError::Incomplete(missing)) = result {
            if let Some(first) = missing.first() {
                self.focus(Focus::Field(*first));
            }
        }
    }

    fn focus(&mut self, focus: Focus) {
        self.state.focus = Some(focus);
        self.reveal_focus();
    }

    fn reveal_focus(&mut self) {
        if let Some(focus) = self.state.focus {
            let row = self.state.focus_rows.get()[focus.ring_index()];
            self.state.scroll.ensure_visible(row);
        }
    }

    fn handle_click(&mut self, id: u16) -> bool {
        if id == SEND {
            self.state.focus = Some(Focus::Send);
            self.submit();
            return true;
        }
        if let Some(t) = id.checked_sub(OPTION_BASE).and_then(InquiryType::from_index) {
            logic::select_type(&mut self.state, t);
            self.state.focus = Some(Focus::Field(Field::InquiryType));
            return true;
        }
        if let Some(field) = id.checked_sub(FOCUS_BASE).and_then(Field::from_index) {
            match field {
                Field::AgreeToContact => logic::toggle_consent(&mut self.state),
                Field::InquiryType => logic::cycle_type(&mut self.state, 1),
                _ => {}
            }
            self.focus(Focus::Field(field));
            return true;
        }
        false
    }

    fn handle_focused(&mut self, focus: Focus, event: &InputEvent) -> bool {
        match event {
            InputEvent::Tab | InputEvent::Down => {
                logic::focus_step(&mut self.state, 1);
                self.reveal_focus();
            }
            InputEvent::BackTab | InputEvent::Up => {
                logic::focus_step(&mut self.state, -1);
                self.reveal_focus();
            }
            InputEvent::Esc => self.state.focus = None,
            InputEvent::Enter => {
                let result = logic::activate(&mut self.state, self.delivery.as_mut());
                self.after_submit(result);
                self.reveal_focus();
            }
            InputEvent::Backspace => {
                logic::backspace(&mut self.state);
            }
            InputEvent::Left if focus == Focus::Field(Field::InquiryType) => {
                logic::cycle_type(&mut self.state, -1)
            }
            InputEvent::Right if focus == Focus::Field(Field::InquiryType) => {
                logic::cycle_type(&mut self.state, 1)
            }
            InputEvent::Key(' ') if focus == Focus::Field(Field::InquiryType) => {
                logic::cycle_type(&mut self.state, 1)
            }
            InputEvent::Key(' ') if focus == Focus::Field(Field::AgreeToContact) => {
                logic::toggle_consent(&mut self.state)
            }
            InputEvent::Key(' ') if focus == Focus::Send => self.submit(),
            InputEvent::Key(c) => {
                if !logic::type_char(&mut self.state, *c) {
                    return self.state.scroll.handle_key(event);
                }
            }
            _ => return false,
        }
        true
    }
}

impl Page for ContactPage {
    fn handle_input(&mut self, event: &InputEvent) -> bool {
        if let InputEvent::Click(id) = event {
            if self.state.is_submitted() {
                return false;
            }
            return self.handle_click(*id);
        }
        match self.state.focus {
            Some(focus) if !self.state.is_submitted() => self.handle_focused(focus, event),
            _ => match event {
                InputEvent::Tab if !self.state.is_submitted() => {
                    self.focus(Focus::Field(Field::FullName));
                    true
                }
                other => self.state.scroll.handle_key(other),
            },
        }
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
    use crate::pages::contact::delivery::RecordingDelivery;
    use crate::pages::contact::state::{InquiryDraft, RESET_DELAY_MS};
    use crate::pages::Route;
    use crate::time::ms_to_ticks;

    fn page() -> (ContactPage, Rc<RefCell<Vec<InquiryDraft>>>) {
        let d = RecordingDelivery::default();
        let sent = d.sent.clone();
        (ContactPage::with_delivery(Box::new(d)), sent)
    }

    fn type_str(p: &mut ContactPage, s: &str) {
        for c in s.chars() {
            assert!(p.handle_input(&InputEvent::Key(c)));
        }
    }

    #[test]
    fn keyboard_fill_and_send() {
        let (mut p, sent) = page();
        p.handle_input(&InputEvent::Tab);
        type_str(&mut p, "Jane Doe");
        p.handle_input(&InputEvent::Tab);
        type_str(&mut p, "jane@example.com");
        p.handle_input(&InputEvent::Tab); // phone
        p.handle_input(&InputEvent::Tab); // inquiry type
        p.handle_input(&InputEvent::Right);
        p.handle_input(&InputEvent::Tab);
        type_str(&mut p, "Hello");
        p.handle_input(&InputEvent::Tab);
        p.handle_input(&InputEvent::Key(' '));
        p.handle_input(&InputEvent::Tab);
        assert_eq!(p.state.focus, Some(Focus::Send));
        p.handle_input(&InputEvent::Enter);

        assert!(p.state.is_submitted());
        let sent = sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].full_name, "Jane Doe");
        assert_eq!(sent[0].inquiry_type, InquiryType::Investor);
        assert!(sent[0].agree_to_contact);
    }

    #[test]
    fn digits_type_into_focused_field() {
        let (mut p, _) = page();
        p.handle_input(&InputEvent::Click(FOCUS_BASE + Field::Phone.index()));
        type_str(&mut p, "555 123");
        assert_eq!(p.state.draft.phone, "555 123");
    }

    #[test]
    fn digits_navigate_when_unfocused() {
        let (mut p, _) = page();
        assert!(!p.handle_input(&InputEvent::Key('1')));
    }

    #[test]
    fn rejected_send_focuses_first_missing_field() {
        let (mut p, sent) = page();
        p.handle_input(&InputEvent::Click(SEND));
        assert!(!p.state.is_submitted());
        assert_eq!(p.state.focus, Some(Focus::Field(Field::FullName)));
        assert!(sent.borrow().is_empty());
    }

    #[test]
    fn option_click_sets_type() {
        let (mut p, _) = page();
        p.handle_input(&InputEvent::Click(OPTION_BASE + InquiryType::Partnership.index()));
        assert_eq!(p.state.draft.inquiry_type, InquiryType::Partnership);
    }

    #[test]
    fn consent_click_toggles() {
        let (mut p, _) = page();
        p.handle_input(&InputEvent::Click(FOCUS_BASE + Field::AgreeToContact.index()));
        assert!(p.state.draft.agree_to_contact);
    }

    #[test]
    fn esc_releases_focus() {
        let (mut p, _) = page();
        p.handle_input(&InputEvent::Tab);
        assert!(p.handle_input(&InputEvent::Esc));
        assert_eq!(p.state.focus, None);
    }

    #[test]
    fn nav_clicks_fall_through() {
        let (mut p, _) = page();
        assert!(!p.handle_input(&InputEvent::Click(Route::About.action_id())));
    }

    fn submitted_page() -> ContactPage {
        let (mut p, _) = page();
        logic::apply_named(&mut p.state.draft, "fullName", "Jane Doe");
        logic::apply_named(&mut p.state.draft, "email", "jane@example.com");
        logic::apply_named(&mut p.state.draft, "message", "Hello");
        logic::apply_named(&mut p.state.draft, "agreeToContact", "true");
        p.handle_input(&InputEvent::Click(SEND));
        assert!(p.state.is_submitted());
        p
    }

    #[test]
    fn confirmation_resets_after_delay() {
        let mut p = submitted_page();
        p.tick(ms_to_ticks(RESET_DELAY_MS));
        assert!(!p.state.is_submitted());
        assert_eq!(p.state.draft, InquiryDraft::default());
    }

    #[test]
    fn teardown_cancels_pending_reset() {
        let mut p = submitted_page();
        p.teardown();
        p.tick(ms_to_ticks(RESET_DELAY_MS) + 10);
        assert!(p.state.is_submitted());
    }

    #[test]
    fn form_clicks_ignored_while_confirming() {
        let mut p = submitted_page();
        assert!(!p.handle_input(&InputEvent::Click(SEND)));
        assert!(!p.handle_input(&InputEvent::Tab));
    }
}
