//! AQI classification and the form state behind the monitor front-ends.

pub mod classify;
pub mod clock;
pub mod config;
pub mod form;
pub mod format;
pub mod tips;

pub use classify::{category_for, classify, classify_input};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{load_settings, load_settings_from, Settings};
pub use form::{AcceptedReading, FormState, ResultPanel};
pub use format::{TimestampFormatter, Zone, TIMESTAMP_PLACEHOLDER};
pub use tips::{pick_tip, FixedTips, RandomTips, TipPicker};
