//! Hand-off of a validated inquiry to whatever actually transmits it.

use thiserror::Error;

use super::state::InquiryDraft;
use crate::console;

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("could not encode inquiry: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("delivery service rejected inquiry: {0}")]
    Rejected(String),
}

/// External notification/email service. Injected into the contact page.
pub trait InquiryDelivery {
    fn send(&mut self, draft: &InquiryDraft) -> Result<(), DeliveryError>;
}

/// Stand-in transport: writes the inquiry to the browser console as JSON.
#[derive(Debug, Default)]
pub struct ConsoleDelivery;

impl InquiryDelivery for ConsoleDelivery {
    fn send(&mut self, draft: &InquiryDraft) -> Result<(), DeliveryError> {
        let json = serde_json::to_string(draft)?;
        console::log(&format!("Form submitted: {}", json));
        Ok(())
    }
}

/// Records every inquiry it is handed; optionally refuses them.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingDelivery {
    pub sent: std::rc::Rc<std::cell::RefCell<Vec<InquiryDraft>>>,
    pub fail: bool,
}

#[cfg(test)]
impl InquiryDelivery for RecordingDelivery {
    fn send(&mut self, draft: &InquiryDraft) -> Result<(), DeliveryError> {
        if self.fail {
            return Err(DeliveryError::Rejected("mailbox unavailable".into()));
        }
        self.sent.borrow_mut().push(draft.clone());
        Ok(())
    }
}
