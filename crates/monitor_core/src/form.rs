//! Form state of the monitor: raw input text, the last accepted reading with
//! its timestamp, and the current tip.
//!
//! `FormState` is an immutable snapshot. `update_input` and `submit` return
//! the next snapshot and leave the receiver untouched, so a rejected
//! submission can never leave partial state behind.

use chrono::{DateTime, Utc};
use shared::{
    domain::{AqiReading, SeverityInfo, Tip},
    error::InvalidReading,
    protocol::ReadingReport,
};

use crate::{
    classify::{category_for, classify},
    clock::Clock,
    format::TimestampFormatter,
    tips::{pick_tip, TipPicker},
};

/// A reading paired with the instant it was accepted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AcceptedReading {
    pub reading: AqiReading,
    pub at: DateTime<Utc>,
}

/// Everything the result panel shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResultPanel {
    pub reading: AqiReading,
    pub info: SeverityInfo,
    pub at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    input_text: String,
    accepted: Option<AcceptedReading>,
    tip: Option<Tip>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty form that already carries a tip, as shown on first load.
    pub fn opening<P: TipPicker + ?Sized>(picker: &mut P) -> Self {
        Self {
            tip: Some(pick_tip(picker)),
            ..Self::default()
        }
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn accepted(&self) -> Option<AcceptedReading> {
        self.accepted
    }

    pub fn accepted_reading(&self) -> Option<AqiReading> {
        self.accepted.map(|accepted| accepted.reading)
    }

    pub fn accepted_at(&self) -> Option<DateTime<Utc>> {
        self.accepted.map(|accepted| accepted.at)
    }

    pub fn tip(&self) -> Option<Tip> {
        self.tip
    }

    #[must_use]
    pub fn update_input(&self, text: impl Into<String>) -> Self {
        Self {
            input_text: text.into(),
            ..self.clone()
        }
    }

    /// Validates the current input. On success the reading, its timestamp
    /// and a freshly picked tip replace whatever was shown before.
    pub fn submit<C, P>(&self, clock: &C, picker: &mut P) -> Result<Self, InvalidReading>
    where
        C: Clock + ?Sized,
        P: TipPicker + ?Sized,
    {
        let reading = match self.input_text.parse::<AqiReading>() {
            Ok(reading) => reading,
            Err(err) => {
                tracing::warn!(
                    input = %err.input,
                    reason = err.reason.describe(),
                    "rejected AQI submission"
                );
                return Err(err);
            }
        };

        let at = clock.now();
        let tip = pick_tip(picker);
        tracing::debug!(
            aqi = %reading,
            category = ?category_for(reading),
            tip = tip.index(),
            "accepted AQI reading"
        );

        Ok(Self {
            input_text: self.input_text.clone(),
            accepted: Some(AcceptedReading { reading, at }),
            tip: Some(tip),
        })
    }

    /// Present only when a reading is accepted and it classifies.
    pub fn result_panel(&self) -> Option<ResultPanel> {
        let accepted = self.accepted?;
        let info = classify(accepted.reading.value())?;
        Some(ResultPanel {
            reading: accepted.reading,
            info,
            at: accepted.at,
        })
    }

    pub fn timestamp_label(&self, formatter: &TimestampFormatter) -> String {
        formatter.format_optional(self.accepted_at())
    }

    pub fn report(&self, formatter: &TimestampFormatter) -> Option<ReadingReport> {
        let panel = self.result_panel()?;
        Some(ReadingReport::new(
            panel.reading,
            &panel.info,
            panel.at,
            formatter.format(panel.at),
            self.tip,
        ))
    }
}

#[cfg(test)]
#[path = "tests/form_tests.rs"]
mod tests;
