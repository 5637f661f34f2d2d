//! Contact page state: the inquiry draft and its submission lifecycle.

use std::cell::Cell;

use serde::Serialize;

use crate::pages::ScrollState;
use crate::timer::Deferred;

/// What the inquiry is about. The form can only ever hold one of these.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InquiryType {
    #[default]
    General,
    Investor,
    Project,
    Partnership,
    Services,
}

impl InquiryType {
    pub const ALL: [InquiryType; 5] = [
        InquiryType::General,
        InquiryType::Investor,
        InquiryType::Project,
        InquiryType::Partnership,
        InquiryType::Services,
    ];

    /// Form value, as submitted.
    pub fn value(self) -> &'static str {
        match self {
            InquiryType::General => "general",
            InquiryType::Investor => "investor",
            InquiryType::Project => "project",
            InquiryType::Partnership => "partnership",
            InquiryType::Services => "services",
        }
    }

    /// `None` for anything outside the closed set.
    pub fn from_value(value: &str) -> Option<InquiryType> {
        InquiryType::ALL.into_iter().find(|t| t.value() == value)
    }

    pub fn label(self) -> &'static str {
        match self {
            InquiryType::General => "General Inquiry",
            InquiryType::Investor => "Investor Relations",
            InquiryType::Project => "Project Investment",
            InquiryType::Partnership => "Partnership Opportunity",
            InquiryType::Services => "Services Inquiry",
        }
    }

    pub fn index(self) -> u16 {
        match self {
            InquiryType::General => 0,
            InquiryType::Investor => 1,
            InquiryType::Project => 2,
            InquiryType::Partnership => 3,
            InquiryType::Services => 4,
        }
    }

    pub fn from_index(i: u16) -> Option<InquiryType> {
        InquiryType::ALL.into_iter().find(|t| t.index() == i)
    }

    /// Next (or previous, for negative `step`) option, wrapping around.
    pub fn cycle(self, step: i32) -> InquiryType {
        let n = InquiryType::ALL.len() as i32;
        let i = (self.index() as i32 + step).rem_euclid(n);
        InquiryType::ALL[i as usize]
    }
}

/// The in-progress inquiry. Serialized in the shape the delivery service
/// expects (camelCase keys).
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryDraft {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub inquiry_type: InquiryType,
    pub message: String,
    pub agree_to_contact: bool,
}

/// Form fields, in on-screen order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    FullName,
    Email,
    Phone,
    InquiryType,
    Message,
    AgreeToContact,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::FullName,
        Field::Email,
        Field::Phone,
        Field::InquiryType,
        Field::Message,
        Field::AgreeToContact,
    ];

    /// Form control name.
    pub fn name(self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::InquiryType => "inquiryType",
            Field::Message => "message",
            Field::AgreeToContact => "agreeToContact",
        }
    }

    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.name() == name)
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::FullName => "Full Name",
            Field::Email => "Email Address",
            Field::Phone => "Phone Number",
            Field::InquiryType => "Inquiry Type",
            Field::Message => "Message",
            Field::AgreeToContact => "Consent",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::FullName => "Your name",
            Field::Email => "your.email@company.com",
            Field::Phone => "+1 (555) 123-4567",
            Field::Message => "Tell us about your inquiry...",
            Field::InquiryType | Field::AgreeToContact => "",
        }
    }

    /// Required for submission. Inquiry type always holds a value, so only
    /// the free-text fields and consent can be missing.
    pub fn is_required(self) -> bool {
        !matches!(self, Field::Phone)
    }

    pub fn is_text(self) -> bool {
        matches!(
            self,
            Field::FullName | Field::Email | Field::Phone | Field::Message
        )
    }

    pub fn index(self) -> u16 {
        match self {
            Field::FullName => 0,
            Field::Email => 1,
            Field::Phone => 2,
            Field::InquiryType => 3,
            Field::Message => 4,
            Field::AgreeToContact => 5,
        }
    }

    pub fn from_index(i: u16) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.index() == i)
    }
}

/// One field's new value. The variant fixes the value's type, so an inquiry
/// type outside its domain cannot be expressed.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldUpdate {
    FullName(String),
    Email(String),
    Phone(String),
    InquiryType(InquiryType),
    Message(String),
    AgreeToContact(bool),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Editing,
    Submitted,
}

/// What keyboard input is currently directed at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    Field(Field),
    Send,
}

impl Focus {
    pub const RING: [Focus; 7] = [
        Focus::Field(Field::FullName),
        Focus::Field(Field::Email),
        Focus::Field(Field::Phone),
        Focus::Field(Field::InquiryType),
        Focus::Field(Field::Message),
        Focus::Field(Field::AgreeToContact),
        Focus::Send,
    ];

    pub fn ring_index(self) -> usize {
        match self {
            Focus::Field(f) => f.index() as usize,
            Focus::Send => Focus::RING.len() - 1,
        }
    }
}

/// Display duration of the confirmation panel.
pub const RESET_DELAY_MS: u32 = 3000;

pub struct ContactState {
    pub draft: InquiryDraft,
    pub submission: SubmissionState,
    /// Pending `Submitted → Editing` transition.
    pub reset_timer: Deferred,
    pub focus: Option<Focus>,
    /// Required fields flagged by the last rejected submit.
    pub missing: Vec<Field>,
    pub scroll: ScrollState,
    /// Visual row of each focus-ring entry in the last rendered body.
    pub focus_rows: Cell<[u16; 7]>,
}

impl ContactState {
    pub fn new() -> Self {
        Self {
            draft: InquiryDraft::default(),
            submission: SubmissionState::Editing,
            reset_timer: Deferred::new(),
            focus: None,
            missing: Vec::new(),
            scroll: ScrollState::new(),
            focus_rows: Cell::new([0; 7]),
        }
    }

    pub fn is_submitted(&self) -> bool {
        self.submission == SubmissionState::Submitted
    }
}
