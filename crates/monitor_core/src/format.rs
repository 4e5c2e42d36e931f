//! Timestamp rendering for the reading-details card.
//!
//! Dates show as abbreviated month, day and year; times as hour and minute.
//! Month names and day periods come from chrono's locale tables. Without a
//! recognised locale the generic `%Y-%m-%d %H:%M` pattern is used instead.

use std::fmt::Display;

use chrono::{DateTime, FixedOffset, Local, Locale, Offset, TimeZone, Utc};

/// Shown while no reading has been accepted.
pub const TIMESTAMP_PLACEHOLDER: &str = "—";

pub const GENERIC_PATTERN: &str = "%Y-%m-%d %H:%M";

const MONTH_FIRST_PATTERN: &str = "%b %d, %Y, %I:%M %p";
const DAY_FIRST_PATTERN: &str = "%d %b %Y, %H:%M";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    /// The viewer's local time zone.
    Local,
    Fixed(FixedOffset),
}

impl Zone {
    /// Parses offsets such as `+02:00` or `-0530`. `UTC` and `Z` name the
    /// zero offset.
    pub fn parse_offset(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case("utc") || raw.eq_ignore_ascii_case("z") {
            return Some(Zone::utc());
        }
        raw.parse::<FixedOffset>().ok().map(Zone::Fixed)
    }

    pub fn utc() -> Self {
        Zone::Fixed(Utc.fix())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TimestampFormatter {
    locale: Option<Locale>,
    zone: Zone,
}

impl TimestampFormatter {
    pub fn new(locale: Option<&str>, zone: Zone) -> Self {
        match locale.and_then(parse_locale) {
            Some(locale) => Self {
                locale: Some(locale),
                zone,
            },
            None => Self::generic(zone),
        }
    }

    pub fn generic(zone: Zone) -> Self {
        Self { locale: None, zone }
    }

    pub fn locale(&self) -> Option<Locale> {
        self.locale
    }

    pub fn zone(&self) -> Zone {
        self.zone
    }

    pub fn format(&self, at: DateTime<Utc>) -> String {
        match self.zone {
            Zone::Local => self.render(&at.with_timezone(&Local)),
            Zone::Fixed(offset) => self.render(&at.with_timezone(&offset)),
        }
    }

    /// Placeholder when nothing has been recorded yet.
    pub fn format_optional(&self, at: Option<DateTime<Utc>>) -> String {
        at.map(|at| self.format(at))
            .unwrap_or_else(|| TIMESTAMP_PLACEHOLDER.to_string())
    }

    fn render<Tz: TimeZone>(&self, at: &DateTime<Tz>) -> String
    where
        Tz::Offset: Display,
    {
        match self.locale {
            Some(locale) => at
                .format_localized(pattern_for(locale), locale)
                .to_string(),
            None => at.format(GENERIC_PATTERN).to_string(),
        }
    }
}

/// Accepts POSIX (`de_DE.UTF-8`, `sr_RS@latin`) and BCP 47 (`en-US`) spellings.
pub fn parse_locale(raw: &str) -> Option<Locale> {
    let raw = raw.trim();
    let base = raw.split(['.', '@']).next().unwrap_or(raw);
    if base.is_empty() || base.eq_ignore_ascii_case("C") || base.eq_ignore_ascii_case("POSIX") {
        return None;
    }
    let normalized = base.replace('-', "_");
    Locale::try_from(normalized.as_str()).ok()
}

fn pattern_for(locale: Locale) -> &'static str {
    match locale {
        Locale::en_US | Locale::en_CA | Locale::en_PH => MONTH_FIRST_PATTERN,
        _ => DAY_FIRST_PATTERN,
    }
}

#[cfg(test)]
#[path = "tests/format_tests.rs"]
mod tests;
