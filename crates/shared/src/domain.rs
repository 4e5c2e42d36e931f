use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize, Serializer};

use crate::error::{InvalidReading, InvalidReason};

/// An AQI value that passed validation: finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct AqiReading(f64);

impl AqiReading {
    pub fn new(value: f64) -> Option<Self> {
        if !value.is_finite() || value < 0.0 {
            return None;
        }
        // Folds -0.0 into 0.0 so it never renders as "-0".
        Some(Self(value + 0.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for AqiReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AqiReading {
    type Err = InvalidReading;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(InvalidReading::new(raw, InvalidReason::Empty));
        }
        let value = trimmed
            .parse::<f64>()
            .map_err(|_| InvalidReading::new(raw, InvalidReason::NotANumber))?;
        if value.is_nan() {
            return Err(InvalidReading::new(raw, InvalidReason::NotANumber));
        }
        if value < 0.0 {
            return Err(InvalidReading::new(raw, InvalidReason::Negative));
        }
        Self::new(value).ok_or_else(|| InvalidReading::new(raw, InvalidReason::NotFinite))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AqiCategory {
    Good,
    Moderate,
    UnhealthyForSensitiveGroups,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl AqiCategory {
    /// Bands in ascending order of severity.
    pub const ALL: [AqiCategory; 6] = [
        AqiCategory::Good,
        AqiCategory::Moderate,
        AqiCategory::UnhealthyForSensitiveGroups,
        AqiCategory::Unhealthy,
        AqiCategory::VeryUnhealthy,
        AqiCategory::Hazardous,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AqiCategory::Good => "Good",
            AqiCategory::Moderate => "Moderate",
            AqiCategory::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            AqiCategory::Unhealthy => "Unhealthy",
            AqiCategory::VeryUnhealthy => "Very Unhealthy",
            AqiCategory::Hazardous => "Hazardous",
        }
    }

    /// Inclusive upper bound of the band. `Hazardous` is open-ended.
    pub fn upper_bound(self) -> Option<f64> {
        match self {
            AqiCategory::Good => Some(50.0),
            AqiCategory::Moderate => Some(100.0),
            AqiCategory::UnhealthyForSensitiveGroups => Some(150.0),
            AqiCategory::Unhealthy => Some(200.0),
            AqiCategory::VeryUnhealthy => Some(300.0),
            AqiCategory::Hazardous => None,
        }
    }

    pub fn color(self) -> Rgb {
        match self {
            AqiCategory::Good => Rgb::new(0x00, 0xA6, 0x5A),
            AqiCategory::Moderate => Rgb::new(0xF1, 0xC4, 0x0F),
            AqiCategory::UnhealthyForSensitiveGroups => Rgb::new(0xF3, 0x9C, 0x12),
            AqiCategory::Unhealthy => Rgb::new(0xE7, 0x4C, 0x3C),
            AqiCategory::VeryUnhealthy => Rgb::new(0x8E, 0x44, 0xAD),
            AqiCategory::Hazardous => Rgb::new(0x6B, 0x1F, 0x1F),
        }
    }

    pub fn color_name(self) -> &'static str {
        match self {
            AqiCategory::Good => "green",
            AqiCategory::Moderate => "yellow",
            AqiCategory::UnhealthyForSensitiveGroups => "orange",
            AqiCategory::Unhealthy => "red",
            AqiCategory::VeryUnhealthy => "purple",
            AqiCategory::Hazardous => "maroon",
        }
    }

    pub fn advisory(self) -> &'static str {
        match self {
            AqiCategory::Good => "Air quality is good. Enjoy outdoor activities.",
            AqiCategory::Moderate => {
                "Moderate air quality. Sensitive individuals should consider limiting prolonged outdoor exertion."
            }
            AqiCategory::UnhealthyForSensitiveGroups => {
                "Members of sensitive groups may experience health effects. Reduce prolonged or heavy exertion outdoors."
            }
            AqiCategory::Unhealthy => {
                "Everyone may begin to experience health effects. Limit outdoor activities; consider wearing a mask."
            }
            AqiCategory::VeryUnhealthy => {
                "Serious health effects possible. Avoid outdoor exertion. Use air purifiers indoors if available."
            }
            AqiCategory::Hazardous => {
                "Health alert: everyone may experience more serious effects. Stay indoors and use a well-fitted mask if you must go out."
            }
        }
    }

    pub fn info(self) -> SeverityInfo {
        SeverityInfo {
            category: self,
            color: self.color(),
            color_name: self.color_name(),
            advisory: self.advisory(),
        }
    }
}

impl fmt::Display for AqiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Display attributes of a band. Always derived from a reading, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeverityInfo {
    pub category: AqiCategory,
    pub color: Rgb,
    pub color_name: &'static str,
    pub advisory: &'static str,
}

pub const TIP_CATALOG: [&str; 8] = [
    "Use public transportation or carpool when possible.",
    "Avoid idling your vehicle and maintain proper tire pressure.",
    "Choose walking or cycling for short trips.",
    "Reduce energy consumption at home; switch to LED bulbs.",
    "Avoid burning trash or leaves; compost instead.",
    "Plant trees and maintain indoor plants to improve air quality.",
    "Refuel vehicles in the evening to reduce ozone formation.",
    "Work from home when possible to reduce commuting emissions.",
];

/// One entry of [`TIP_CATALOG`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tip {
    index: usize,
}

impl Tip {
    /// Maps any index onto the catalog.
    pub fn wrapping(index: usize) -> Self {
        Self {
            index: index % TIP_CATALOG.len(),
        }
    }

    pub fn index(self) -> usize {
        self.index
    }

    pub fn text(self) -> &'static str {
        TIP_CATALOG[self.index]
    }
}

impl fmt::Display for Tip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

impl Serialize for Tip {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.text())
    }
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
