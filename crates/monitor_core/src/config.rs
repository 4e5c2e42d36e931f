use std::{fs, path::Path};

use rand::rngs::StdRng;
use serde::Deserialize;

use crate::{
    format::{parse_locale, TimestampFormatter, Zone},
    tips::RandomTips,
};

pub const SETTINGS_FILE: &str = "aqi_monitor.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Locale for timestamps, e.g. `en_US` or `de-DE`.
    pub locale: Option<String>,
    /// Fixed UTC offset such as `+02:00`. The local zone is used when unset.
    pub utc_offset: Option<String>,
    pub log_filter: String,
    /// Makes tip selection reproducible.
    pub tip_seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            locale: None,
            utc_offset: None,
            log_filter: "info".into(),
            tip_seed: None,
        }
    }
}

impl Settings {
    pub fn zone(&self) -> Zone {
        let Some(raw) = self.utc_offset.as_deref() else {
            return Zone::Local;
        };
        Zone::parse_offset(raw).unwrap_or_else(|| {
            tracing::warn!(utc_offset = raw, "ignoring unparsable UTC offset; using local time");
            Zone::Local
        })
    }

    pub fn timestamp_formatter(&self) -> TimestampFormatter {
        let locale = self.locale.as_deref();
        if let Some(raw) = locale {
            if parse_locale(raw).is_none() {
                tracing::warn!(locale = raw, "unknown locale; using generic timestamp format");
            }
        }
        TimestampFormatter::new(locale, self.zone())
    }

    pub fn tip_picker(&self) -> RandomTips<StdRng> {
        RandomTips::from_seed_option(self.tip_seed)
    }
}

pub fn load_settings() -> Settings {
    load_settings_from(Path::new(SETTINGS_FILE), |key| std::env::var(key).ok())
}

/// Defaults, then the TOML file at `path`, then environment overrides.
/// Without an explicit locale the POSIX `LC_ALL`, `LC_TIME` and `LANG`
/// variables are consulted in that order.
pub fn load_settings_from(path: &Path, env: impl Fn(&str) -> Option<String>) -> Settings {
    let mut settings = match fs::read_to_string(path) {
        Ok(raw) => match toml::from_str::<Settings>(&raw) {
            Ok(parsed) => parsed,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "invalid settings file; using defaults");
                Settings::default()
            }
        },
        Err(_) => Settings::default(),
    };

    if let Some(v) = env("AQI_LOCALE") {
        settings.locale = Some(v);
    }
    if let Some(v) = env("APP__LOCALE") {
        settings.locale = Some(v);
    }

    if let Some(v) = env("AQI_UTC_OFFSET") {
        settings.utc_offset = Some(v);
    }
    if let Some(v) = env("APP__UTC_OFFSET") {
        settings.utc_offset = Some(v);
    }

    if let Some(v) = env("APP__LOG_FILTER") {
        settings.log_filter = v;
    }

    if let Some(v) = env("APP__TIP_SEED") {
        match v.trim().parse::<u64>() {
            Ok(seed) => settings.tip_seed = Some(seed),
            Err(_) => tracing::warn!(value = %v, "ignoring non-numeric APP__TIP_SEED"),
        }
    }

    if settings.locale.is_none() {
        settings.locale = ["LC_ALL", "LC_TIME", "LANG"]
            .into_iter()
            .filter_map(|key| env(key))
            .find(|value| !value.trim().is_empty());
    }

    settings
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
