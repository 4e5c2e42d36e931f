//! Events raised by the form widgets and the notice they can produce.

use shared::error::{InvalidReading, InvalidReason};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    InputChanged(String),
    SubmitRequested,
    NoticeDismissed,
}

/// Blocking notice shown after a rejected submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    message: String,
    reason: InvalidReason,
}

impl Notice {
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn reason(&self) -> InvalidReason {
        self.reason
    }
}

impl From<InvalidReading> for Notice {
    fn from(err: InvalidReading) -> Self {
        Self {
            message: err.to_string(),
            reason: err.reason,
        }
    }
}
