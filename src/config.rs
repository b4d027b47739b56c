use std::env;

use serde_json::Value;
use tracing::warn;

pub const DEFAULT_WINDOW_DAYS: u32 = 14;

pub const RESULTS_DAYS_BACK_ENV: &str = "RESULTS_DAYS_BACK";
pub const FIXTURES_DAYS_FORWARD_ENV: &str = "FIXTURES_DAYS_FORWARD";
pub const SNAPSHOT_URL_ENV: &str = "SNAPSHOT_URL";

/// Sizes of the two rolling windows around today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowConfig {
    /// Results lookback in days
    pub results_days_back: u32,
    /// Fixtures lookahead in days
    pub fixtures_days_forward: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            results_days_back: DEFAULT_WINDOW_DAYS,
            fixtures_days_forward: DEFAULT_WINDOW_DAYS,
        }
    }
}

impl WindowConfig {
    pub fn new(results_days_back: u32, fixtures_days_forward: u32) -> Self {
        Self {
            results_days_back: positive_or_default(Some(i64::from(results_days_back))),
            fixtures_days_forward: positive_or_default(Some(i64::from(fixtures_days_forward))),
        }
    }

    /// Read both window sizes from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve both sizes through `lookup`, which maps an env-style key to a raw value.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            results_days_back: resolve_days(lookup(RESULTS_DAYS_BACK_ENV).as_deref()),
            fixtures_days_forward: resolve_days(lookup(FIXTURES_DAYS_FORWARD_ENV).as_deref()),
        }
    }

    /// Apply per-request overrides on top of `self`. An override that does not
    /// resolve to a positive integer leaves the current value in place.
    pub fn with_overrides(self, results_days_back: Option<&Value>, fixtures_days_forward: Option<&Value>) -> Self {
        Self {
            results_days_back: override_days(results_days_back).unwrap_or(self.results_days_back),
            fixtures_days_forward: override_days(fixtures_days_forward).unwrap_or(self.fixtures_days_forward),
        }
    }
}

/// Parse a day count. Absent, blank, non-numeric, zero and negative values all
/// fall back to the default.
pub fn resolve_days(raw: Option<&str>) -> u32 {
    let parsed = raw.map(str::trim).and_then(|s| s.parse::<i64>().ok());
    if raw.is_some_and(|s| !s.trim().is_empty()) && parsed.is_none() {
        warn!(value = ?raw, "Ignoring non-numeric window size");
    }
    positive_or_default(parsed)
}

fn override_days(value: Option<&Value>) -> Option<u32> {
    let days = match value? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }?;
    (days > 0).then(|| positive_or_default(Some(days)))
}

fn positive_or_default(days: Option<i64>) -> u32 {
    days.filter(|&d| d > 0)
        .and_then(|d| u32::try_from(d).ok())
        .unwrap_or(DEFAULT_WINDOW_DAYS)
}
