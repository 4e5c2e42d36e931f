use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{AqiCategory, AqiReading, SeverityInfo, Tip};

/// Machine-readable form of a rendered result panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingReport {
    pub aqi: f64,
    pub category: AqiCategory,
    pub category_label: String,
    pub color: String,
    pub color_name: String,
    pub advisory: String,
    pub recorded_at: DateTime<Utc>,
    pub recorded_at_display: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip: Option<String>,
}

impl ReadingReport {
    pub fn new(
        reading: AqiReading,
        info: &SeverityInfo,
        recorded_at: DateTime<Utc>,
        recorded_at_display: impl Into<String>,
        tip: Option<Tip>,
    ) -> Self {
        Self {
            aqi: reading.value(),
            category: info.category,
            category_label: info.category.label().to_string(),
            color: info.color.hex(),
            color_name: info.color_name.to_string(),
            advisory: info.advisory.to_string(),
            recorded_at,
            recorded_at_display: recorded_at_display.into(),
            tip: tip.map(|t| t.text().to_string()),
        }
    }
}
