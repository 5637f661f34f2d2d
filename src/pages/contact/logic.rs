//! Pure contact-form logic: field updates, validation, submission lifecycle.

use thiserror::Error;

use super::delivery::InquiryDelivery;
use super::state::{
    ContactState, Field, FieldUpdate, Focus, InquiryDraft, InquiryType, SubmissionState,
    RESET_DELAY_MS,
};
use crate::console;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("required fields missing: {}", field_names(.0))]
    Incomplete(Vec<Field>),
    #[error("inquiry already submitted")]
    AlreadySubmitted,
}

fn field_names(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|f| f.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Replace exactly one field of the draft.
pub fn update_field(draft: &mut InquiryDraft, update: FieldUpdate) {
    match update {
        FieldUpdate::FullName(v) => draft.full_name = v,
        FieldUpdate::Email(v) => draft.email = v,
        FieldUpdate::Phone(v) => draft.phone = v,
        FieldUpdate::InquiryType(t) => draft.inquiry_type = t,
        FieldUpdate::Message(v) => draft.message = v,
        FieldUpdate::AgreeToContact(b) => draft.agree_to_contact = b,
    }
}

/// Change handler keyed by form control name. Returns `false` and leaves the
/// draft alone for unknown names and for values outside a field's domain.
pub fn apply_named(draft: &mut InquiryDraft, name: &str, value: &str) -> bool {
    let update = match Field::from_name(name) {
        Some(Field::FullName) => FieldUpdate::FullName(value.to_string()),
        Some(Field::Email) => FieldUpdate::Email(value.to_string()),
        Some(Field::Phone) => FieldUpdate::Phone(value.to_string()),
        Some(Field::Message) => FieldUpdate::Message(value.to_string()),
        Some(Field::InquiryType) => match InquiryType::from_value(value) {
            Some(t) => FieldUpdate::InquiryType(t),
            None => return false,
        },
        Some(Field::AgreeToContact) => match value {
            "true" => FieldUpdate::AgreeToContact(true),
            "false" => FieldUpdate::AgreeToContact(false),
            _ => return false,
        },
        None => return false,
    };
    update_field(draft, update);
    true
}

/// Required fields that are empty (or, for consent, unchecked).
pub fn missing_fields(draft: &InquiryDraft) -> Vec<Field> {
    Field::ALL
        .into_iter()
        .filter(|f| f.is_required())
        .filter(|f| match f {
            Field::FullName => draft.full_name.is_empty(),
            Field::Email => draft.email.is_empty(),
            Field::Message => draft.message.is_empty(),
            Field::AgreeToContact => !draft.agree_to_contact,
            Field::Phone | Field::InquiryType => false,
        })
        .collect()
}

/// Validate and submit. On success the confirmation is shown, the draft goes
/// to `delivery`, and the reset is scheduled. A delivery failure is logged;
/// the visitor still sees the confirmation.
pub fn submit(
    state: &mut ContactState,
    delivery: &mut dyn InquiryDelivery,
) -> Result<(), SubmitError> {
    if state.is_submitted() {
        return Err(SubmitError::AlreadySubmitted);
    }
    let missing = missing_fields(&state.draft);
    if !missing.is_empty() {
        state.missing = missing.clone();
        return Err(SubmitError::Incomplete(missing));
    }

    state.missing.clear();
    state.submission = SubmissionState::Submitted;
    state.focus = None;
    if let Err(e) = delivery.send(&state.draft) {
        console::warn(&format!("Inquiry delivery failed: {}", e));
    }
    state.reset_timer.schedule_ms(RESET_DELAY_MS);
    Ok(())
}

/// Advance the confirmation timer; back to a blank form when it fires.
pub fn tick(state: &mut ContactState, delta_ticks: u32) {
    if state.reset_timer.advance(delta_ticks) {
        state.draft = InquiryDraft::default();
        state.submission = SubmissionState::Editing;
        state.missing.clear();
    }
}

pub fn teardown(state: &mut ContactState) {
    state.reset_timer.cancel();
}

// ── Keyboard editing ───────────────────────────────────────────

/// Current text of a field, as rendered.
pub fn field_text(draft: &InquiryDraft, field: Field) -> &str {
    match field {
        Field::FullName => &draft.full_name,
        Field::Email => &draft.email,
        Field::Phone => &draft.phone,
        Field::Message => &draft.message,
        Field::InquiryType => draft.inquiry_type.label(),
        Field::AgreeToContact => "",
    }
}

fn clear_flag(state: &mut ContactState, field: Field) {
    state.missing.retain(|f| *f != field);
}

/// Write `value` to `field` through the by-name change handler.
fn apply_to(state: &mut ContactState, field: Field, value: &str) -> bool {
    if !apply_named(&mut state.draft, field.name(), value) {
        return false;
    }
    clear_flag_if_filled(state, field);
    true
}

fn clear_flag_if_filled(state: &mut ContactState, field: Field) {
    let filled = match field {
        Field::AgreeToContact => state.draft.agree_to_contact,
        Field::InquiryType => true,
        _ => !field_text(&state.draft, field).is_empty(),
    };
    if filled {
        clear_flag(state, field);
    }
}

/// Append `c` to the focused text field. Returns `false` if no text field
/// has focus.
pub fn type_char(state: &mut ContactState, c: char) -> bool {
    let Some(Focus::Field(field)) = state.focus else {
        return false;
    };
    if !field.is_text() {
        return false;
    }
    let mut text = field_text(&state.draft, field).to_string();
    text.push(c);
    apply_to(state, field, &text)
}

pub fn backspace(state: &mut ContactState) -> bool {
    let Some(Focus::Field(field)) = state.focus else {
        return false;
    };
    if !field.is_text() {
        return false;
    }
    let mut text = field_text(&state.draft, field).to_string();
    text.pop();
    apply_to(state, field, &text)
}

pub fn focus_step(state: &mut ContactState, step: i32) {
    let n = Focus::RING.len() as i32;
    let next = match state.focus {
        Some(f) => (f.ring_index() as i32 + step).rem_euclid(n),
        None if step >= 0 => 0,
        None => n - 1,
    };
    state.focus = Some(Focus::RING[next as usize]);
}

pub fn select_type(state: &mut ContactState, inquiry_type: InquiryType) {
    apply_to(state, Field::InquiryType, inquiry_type.value());
}

pub fn cycle_type(state: &mut ContactState, step: i32) {
    let next = state.draft.inquiry_type.cycle(step);
    select_type(state, next);
}

pub fn toggle_consent(state: &mut ContactState) {
    let next = if state.draft.agree_to_contact { "false" } else { "true" };
    apply_to(state, Field::AgreeToContact, next);
}

/// Enter key: submit on Send, otherwise move to the next control.
pub fn activate(
    state: &mut ContactState,
    delivery: &mut dyn InquiryDelivery,
) -> Result<(), SubmitError> {
    match state.focus {
        Some(Focus::Send) => submit(state, delivery),
        _ => {
            focus_step(state, 1);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::contact::delivery::RecordingDelivery;
    use crate::time::ms_to_ticks;

    fn filled() -> ContactState {
        let mut s = ContactState::new();
        assert!(apply_named(&mut s.draft, "fullName", "Jane Doe"));
        assert!(apply_named(&mut s.draft, "email", "jane@example.com"));
        assert!(apply_named(&mut s.draft, "message", "Hello"));
        assert!(apply_named(&mut s.draft, "agreeToContact", "true"));
        s
    }

    #[test]
    fn complete_draft_submits() {
        let mut s = filled();
        let mut d = RecordingDelivery::default();
        assert_eq!(submit(&mut s, &mut d), Ok(()));
        assert_eq!(s.submission, SubmissionState::Submitted);
        assert_eq!(d.sent.borrow().len(), 1);
        assert_eq!(d.sent.borrow()[0].full_name, "Jane Doe");
        assert!(s.reset_timer.is_pending());
    }

    #[test]
    fn missing_consent_blocks_submit() {
        let mut s = filled();
        apply_named(&mut s.draft, "agreeToContact", "false");
        let mut d = RecordingDelivery::default();
        assert_eq!(
            submit(&mut s, &mut d),
            Err(SubmitError::Incomplete(vec![Field::AgreeToContact]))
        );
        assert_eq!(s.submission, SubmissionState::Editing);
        assert!(d.sent.borrow().is_empty());
        assert!(!s.reset_timer.is_pending());
        assert_eq!(s.missing, vec![Field::AgreeToContact]);
    }

    #[test]
    fn empty_draft_reports_every_required_field() {
        let mut s = ContactState::new();
        let err = submit(&mut s, &mut RecordingDelivery::default()).unwrap_err();
        assert_eq!(
            err,
            SubmitError::Incomplete(vec![
                Field::FullName,
                Field::Email,
                Field::Message,
                Field::AgreeToContact,
            ])
        );
        assert_eq!(
            err.to_string(),
            "required fields missing: fullName, email, message, agreeToContact"
        );
    }

    #[test]
    fn phone_is_optional() {
        let s = filled();
        assert!(s.draft.phone.is_empty());
        assert!(missing_fields(&s.draft).is_empty());
    }

    #[test]
    fn resets_after_delay() {
        let mut s = filled();
        apply_named(&mut s.draft, "inquiryType", "investor");
        submit(&mut s, &mut RecordingDelivery::default()).unwrap();

        tick(&mut s, ms_to_ticks(RESET_DELAY_MS) - 1);
        assert!(s.is_submitted());
        tick(&mut s, 1);
        assert_eq!(s.submission, SubmissionState::Editing);
        assert_eq!(s.draft, InquiryDraft::default());
        assert_eq!(s.draft.inquiry_type, InquiryType::General);
        assert!(!s.draft.agree_to_contact);
    }

    #[test]
    fn teardown_prevents_reset() {
        let mut s = filled();
        submit(&mut s, &mut RecordingDelivery::default()).unwrap();
        teardown(&mut s);
        tick(&mut s, ms_to_ticks(RESET_DELAY_MS) * 2);
        assert!(s.is_submitted());
        assert_eq!(s.draft.full_name, "Jane Doe");
    }

    #[test]
    fn second_submit_is_rejected() {
        let mut s = filled();
        let mut d = RecordingDelivery::default();
        submit(&mut s, &mut d).unwrap();
        tick(&mut s, 5);
        let before = s.reset_timer.remaining_ticks();
        assert_eq!(submit(&mut s, &mut d), Err(SubmitError::AlreadySubmitted));
        assert_eq!(d.sent.borrow().len(), 1);
        assert_eq!(s.reset_timer.remaining_ticks(), before);
    }

    #[test]
    fn failed_delivery_still_confirms() {
        let mut s = filled();
        let mut d = RecordingDelivery {
            fail: true,
            ..RecordingDelivery::default()
        };
        assert_eq!(submit(&mut s, &mut d), Ok(()));
        assert!(s.is_submitted());
    }

    #[test]
    fn inquiry_type_stays_in_domain() {
        let mut d = InquiryDraft::default();
        assert!(!apply_named(&mut d, "inquiryType", "vip"));
        assert_eq!(d.inquiry_type, InquiryType::General);
        assert!(apply_named(&mut d, "inquiryType", "services"));
        assert_eq!(d.inquiry_type, InquiryType::Services);
    }

    #[test]
    fn apply_named_ignores_unknown_and_malformed() {
        let mut d = InquiryDraft::default();
        assert!(!apply_named(&mut d, "company", "ACME"));
        assert!(!apply_named(&mut d, "agreeToContact", "yes"));
        assert_eq!(d, InquiryDraft::default());
    }

    #[test]
    fn update_field_touches_one_field() {
        let mut d = InquiryDraft::default();
        update_field(&mut d, FieldUpdate::Phone("+1 555".into()));
        assert_eq!(
            d,
            InquiryDraft {
                phone: "+1 555".into(),
                ..InquiryDraft::default()
            }
        );
    }

    #[test]
    fn typing_goes_to_focused_text_field() {
        let mut s = ContactState::new();
        assert!(!type_char(&mut s, 'x'));
        s.focus = Some(Focus::Field(Field::Email));
        for c in "a@b".chars() {
            type_char(&mut s, c);
        }
        assert!(backspace(&mut s));
        assert_eq!(s.draft.email, "a@");
        s.focus = Some(Focus::Field(Field::InquiryType));
        assert!(!type_char(&mut s, 'z'));
    }

    #[test]
    fn typing_clears_missing_flag() {
        let mut s = ContactState::new();
        let _ = submit(&mut s, &mut RecordingDelivery::default());
        assert!(s.missing.contains(&Field::FullName));
        s.focus = Some(Focus::Field(Field::FullName));
        type_char(&mut s, 'J');
        assert!(!s.missing.contains(&Field::FullName));
    }

    #[test]
    fn focus_ring_wraps() {
        let mut s = ContactState::new();
        focus_step(&mut s, -1);
        assert_eq!(s.focus, Some(Focus::Send));
        focus_step(&mut s, 1);
        assert_eq!(s.focus, Some(Focus::Field(Field::FullName)));
    }

    #[test]
    fn enter_on_send_submits() {
        let mut s = filled();
        s.focus = Some(Focus::Send);
        let mut d = RecordingDelivery::default();
        assert_eq!(activate(&mut s, &mut d), Ok(()));
        assert!(s.is_submitted());
    }

    #[test]
    fn enter_elsewhere_advances() {
        let mut s = ContactState::new();
        s.focus = Some(Focus::Field(Field::Phone));
        activate(&mut s, &mut RecordingDelivery::default()).unwrap();
        assert_eq!(s.focus, Some(Focus::Field(Field::InquiryType)));
    }

    #[test]
    fn consent_toggle() {
        let mut s = ContactState::new();
        toggle_consent(&mut s);
        assert!(s.draft.agree_to_contact);
        toggle_consent(&mut s);
        assert!(!s.draft.agree_to_contact);
    }

    #[test]
    fn typed_edits_match_by_name_updates() {
        let mut typed = ContactState::new();
        typed.focus = Some(Focus::Field(Field::FullName));
        for c in "Jane".chars() {
            assert!(type_char(&mut typed, c));
        }
        let mut named = InquiryDraft::default();
        assert!(apply_named(&mut named, "fullName", "Jane"));
        assert_eq!(typed.draft, named);
    }

    #[test]
    fn type_selection_stays_in_closed_set() {
        let mut s = ContactState::new();
        select_type(&mut s, InquiryType::Services);
        assert_eq!(s.draft.inquiry_type, InquiryType::Services);
        cycle_type(&mut s, 1);
        assert_eq!(s.draft.inquiry_type, InquiryType::General);
        cycle_type(&mut s, -2);
        assert_eq!(s.draft.inquiry_type, InquiryType::Partnership);
        assert!(!apply_named(&mut s.draft, "inquiryType", "vip"));
        assert_eq!(s.draft.inquiry_type, InquiryType::Partnership);
    }

    #[test]
    fn checking_consent_clears_its_flag() {
        let mut s = ContactState::new();
        let _ = submit(&mut s, &mut RecordingDelivery::default());
        assert!(s.missing.contains(&Field::AgreeToContact));
        toggle_consent(&mut s);
        assert!(!s.missing.contains(&Field::AgreeToContact));
        toggle_consent(&mut s);
        assert!(!s.draft.agree_to_contact);
    }
}
