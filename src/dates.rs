//! Calendar helpers anchored to Europe/London.
//!
//! Snapshot dates and times are civil values in London, so "today" and every
//! weekend boundary is computed there rather than in the host's zone.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Europe::London;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

/// Time used by feeds when the throw-in is not known yet.
pub const UNKNOWN_TIME: &str = "00:00";

/// Current calendar date in London.
pub fn today() -> NaiveDate {
    today_at(Utc::now())
}

/// Calendar date in London at the instant `now_utc`.
pub fn today_at(now_utc: DateTime<Utc>) -> NaiveDate {
    now_utc.with_timezone(&London).date_naive()
}

/// Shift a calendar date by `n` days. Works on the plain y/m/d value, so a
/// DST change on either side never moves the result.
pub fn add_days(date: NaiveDate, n: i64) -> NaiveDate {
    Duration::try_days(n)
        .and_then(|delta| date.checked_add_signed(delta))
        .unwrap_or(if n < 0 { NaiveDate::MIN } else { NaiveDate::MAX })
}

/// Parse a strict, zero-padded `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let b = s.as_bytes();
    let shape_ok = b.len() == 10
        && b[4] == b'-'
        && b[7] == b'-'
        && b.iter().enumerate().all(|(i, c)| i == 4 || i == 7 || c.is_ascii_digit());
    if !shape_ok {
        return None;
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}

pub fn parse_time(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), TIME_FORMAT).ok()
}

pub fn iso(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Resolve a London civil date/time to its UTC instant.
///
/// Times that fall in the spring-forward gap resolve one hour later; times in the
/// autumn overlap take the earlier (BST) instant.
pub fn london_to_utc(date: NaiveDate, time: NaiveTime) -> DateTime<Utc> {
    let naive = NaiveDateTime::new(date, time);
    let local = London
        .from_local_datetime(&naive)
        .earliest()
        .or_else(|| London.from_local_datetime(&(naive + Duration::hours(1))).earliest());
    match local {
        Some(dt) => dt.with_timezone(&Utc),
        None => Utc.from_utc_datetime(&naive),
    }
}

/// Display form of a throw-in time, e.g. `15:30 BST` or `19:00 GMT`.
///
/// The unknown-time sentinel renders as `TBC`; anything unparseable is
/// returned as given.
pub fn format_time(date: &str, time: &str) -> String {
    if time.trim() == UNKNOWN_TIME {
        return "TBC".to_string();
    }
    let (Some(d), Some(t)) = (parse_date(date), parse_time(time)) else {
        return time.to_string();
    };
    let local = london_to_utc(d, t).with_timezone(&London);
    local.format("%H:%M %Z").to_string()
}

/// Prime time: 12:00 to 17:00 inclusive.
pub fn is_between_noon_and_five(time: &str) -> bool {
    let Some(t) = parse_time(time) else {
        return false;
    };
    let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap_or(NaiveTime::MIN);
    let five = NaiveTime::from_hms_opt(17, 0, 0).unwrap_or(NaiveTime::MIN);
    noon <= t && t <= five
}

/// Saturday and Sunday of the nearest weekend on or after `today`.
/// A Saturday is its own next weekend; a Sunday looks ahead six days.
pub fn next_weekend_boundaries(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let dow = i64::from(today.weekday().num_days_from_monday());
    let to_saturday = (5 - dow).rem_euclid(7);
    let sat = add_days(today, to_saturday);
    (sat, add_days(sat, 1))
}

/// Saturday and Sunday of the most recent weekend starting on or before `today`.
pub fn previous_weekend_boundaries(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let dow = i64::from(today.weekday().num_days_from_monday());
    let since_saturday = (dow - 5).rem_euclid(7);
    let sat = add_days(today, -since_saturday);
    (sat, add_days(sat, 1))
}
