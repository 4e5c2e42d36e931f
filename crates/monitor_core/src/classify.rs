//! Six-band AQI lookup.
//!
//! Each band owns an inclusive upper bound, so a value sitting exactly on a
//! boundary (50, 100, 150, 200, 300) falls into the less severe band. The
//! last band is open-ended and the bands tile every non-negative number.

use shared::domain::{AqiCategory, AqiReading, SeverityInfo};

/// Band of a validated reading.
pub fn category_for(reading: AqiReading) -> AqiCategory {
    band_for(reading.value())
}

/// Classifies a raw number. NaN and negative values have no band.
pub fn classify(aqi: f64) -> Option<SeverityInfo> {
    if aqi.is_nan() || aqi < 0.0 {
        return None;
    }
    Some(band_for(aqi).info())
}

/// Classifies unvalidated text; empty or non-numeric text has no band.
pub fn classify_input(text: &str) -> Option<SeverityInfo> {
    text.trim().parse::<f64>().ok().and_then(classify)
}

fn band_for(aqi: f64) -> AqiCategory {
    AqiCategory::ALL
        .into_iter()
        .find(|band| band.upper_bound().map_or(true, |bound| aqi <= bound))
        .unwrap_or(AqiCategory::Hazardous)
}

#[cfg(test)]
#[path = "tests/classify_tests.rs"]
mod tests;
