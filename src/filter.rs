//! Which records are shown at all: placeholder teams and the rolling date windows.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::config::WindowConfig;
use crate::dates::{add_days, iso, parse_date};
use crate::model::record::Record;
use crate::search::strip_diacritics;

// All patterns run against lowercase, diacritic-stripped names.
static SENTINEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:tbd|tba|tbc|bye|unknown|to be confirmed|to be decided)\b").unwrap()
});

static RESULT_DEPENDENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"winner|loser|runner[\s-]*up|top team|(?:first|second|third|fourth|1st|2nd|3rd|4th)\s+place|\b(?:1st|2nd|3rd|4th)\b",
    )
    .unwrap()
});

static BRACKET_STAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"quarter[\s-]*final|semi[\s-]*final|final|prelim|qualifier|play[\s-]*off|round\s*\d+").unwrap()
});

static GROUP_SLOT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:group|pool)\s+[a-z0-9]").unwrap());

static STAGE_ABBREVIATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:(?:qf|sf|rf)\d*|r\d{1,2})\b").unwrap());

static VERSUS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b(?:v|vs|versus)\b").unwrap());

/// True when `name` is an unresolved bracket slot rather than a real team.
///
/// "Team A/Team B" with no versus marker counts as a slot, which also catches
/// any genuine club name written with a slash.
pub fn is_placeholder_team(name: &str) -> bool {
    let t = strip_diacritics(name.trim()).to_lowercase();
    if t.is_empty() {
        return true;
    }
    SENTINEL.is_match(&t)
        || RESULT_DEPENDENT.is_match(&t)
        || BRACKET_STAGE.is_match(&t)
        || GROUP_SLOT.is_match(&t)
        || STAGE_ABBREVIATION.is_match(&t)
        || (t.contains('/') && !VERSUS.is_match(&t))
}

/// Inclusive `start <= date <= end` on canonical `YYYY-MM-DD` strings.
/// Dates that are not real calendar dates are never in a window.
pub fn is_date_in_window(date: &str, window_start: &str, window_end: &str) -> bool {
    parse_date(date).is_some() && window_start <= date && date <= window_end
}

pub fn is_renderable(record: &Record) -> bool {
    !is_placeholder_team(&record.home) && !is_placeholder_team(&record.away)
}

/// Both windows resolved against a fixed "today".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Windows {
    pub results_start: String,
    pub results_end: String,
    pub fixtures_start: String,
    pub fixtures_end: String,
}

impl Windows {
    pub fn new(today: NaiveDate, config: &WindowConfig) -> Self {
        Windows {
            results_start: iso(add_days(today, -i64::from(config.results_days_back))),
            results_end: iso(today),
            fixtures_start: iso(today),
            fixtures_end: iso(add_days(today, i64::from(config.fixtures_days_forward))),
        }
    }

    pub fn in_results_window(&self, date: &str) -> bool {
        is_date_in_window(date, &self.results_start, &self.results_end)
    }

    pub fn in_fixtures_window(&self, date: &str) -> bool {
        is_date_in_window(date, &self.fixtures_start, &self.fixtures_end)
    }
}

/// Renderable, not yet played, and inside the fixtures window.
pub fn upcoming_fixtures(records: &[Record], windows: &Windows) -> Vec<Record> {
    records
        .iter()
        .filter(|r| is_renderable(r) && windows.in_fixtures_window(&r.date) && !r.is_full_time())
        .cloned()
        .collect()
}

/// Renderable and inside the results window, whatever the status.
pub fn recent_results(records: &[Record], windows: &Windows) -> Vec<Record> {
    records
        .iter()
        .filter(|r| is_renderable(r) && windows.in_results_window(&r.date))
        .cloned()
        .collect()
}
