use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The user-facing notice shown for every rejected submission.
pub const INVALID_READING_NOTICE: &str = "Please enter a valid non-negative AQI number.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidReason {
    Empty,
    NotANumber,
    NotFinite,
    Negative,
}

impl InvalidReason {
    pub fn describe(self) -> &'static str {
        match self {
            InvalidReason::Empty => "input is empty",
            InvalidReason::NotANumber => "input is not a number",
            InvalidReason::NotFinite => "input is not a finite number",
            InvalidReason::Negative => "input is negative",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", INVALID_READING_NOTICE)]
pub struct InvalidReading {
    pub input: String,
    pub reason: InvalidReason,
}

impl InvalidReading {
    pub fn new(input: impl Into<String>, reason: InvalidReason) -> Self {
        Self {
            input: input.into(),
            reason,
        }
    }
}
