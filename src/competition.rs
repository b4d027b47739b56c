//! Competition labels and per-competition summaries.

use std::collections::HashMap;
use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;

use crate::dates::{iso, london_to_utc, next_weekend_boundaries, parse_date, parse_time};
use crate::filter::is_date_in_window;
use crate::model::competition::CompetitionSummary;
use crate::model::record::Record;
use crate::search::strip_diacritics;

static SENIOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b(?:senior|sfc)\b").unwrap());
static INTERMEDIATE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b(?:intermediate|ifc)\b").unwrap());
static JUNIOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b(?:junior|jfc)\b").unwrap());

static PROVINCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(ulster|leinster|munster|connacht)\b").unwrap());

// Case-insensitive on the original text so the match keeps its source casing
static STAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)quarter\s*final|semi\s*final|final|round\s*\d+").unwrap());

/// Compact label such as "Ulster SFC Quarter Final".
///
/// Text without a recognised championship level is returned unchanged.
pub fn shorten(competition: &str) -> String {
    let folded = strip_diacritics(competition).to_lowercase();

    let level = if SENIOR.is_match(&folded) {
        "SFC"
    } else if INTERMEDIATE.is_match(&folded) {
        "IFC"
    } else if JUNIOR.is_match(&folded) {
        "JFC"
    } else {
        return competition.to_string();
    };

    let province = PROVINCE.captures(&folded).map(|c| capitalize(&c[1]));
    let stage = STAGE.find(competition).map(|m| m.as_str().to_string());

    let mut parts: Vec<String> = Vec::with_capacity(3);
    parts.extend(province);
    parts.push(level.to_string());
    parts.extend(stage);
    parts.join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// URL-safe slug: "Connacht Senior Football" -> "connacht-senior-football".
pub fn slugify(value: &str) -> String {
    let cleaned: String = strip_diacritics(value)
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() || *c == '-')
        .collect();
    cleaned
        .split(|c: char| c.is_whitespace() || c == '-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Ranking weight for a competition name; bigger draws score higher.
pub fn popularity_score(name: &str) -> u32 {
    let t = name.to_lowercase();
    let any = |needles: &[&str]| needles.iter().any(|n| t.contains(n));

    let mut score = 0;
    if t.contains("all-ireland") {
        score += 100;
    }
    if any(&["ulster", "munster", "leinster", "connacht", "provincial"]) {
        score += 80;
    }
    if any(&["national league", "nfl", "nhl"]) {
        score += 70;
    }
    if t.contains("senior championship") {
        score += 60;
    }
    if t.contains("intermediate") {
        score += 50;
    }
    if t.contains("junior") {
        score += 40;
    }
    if any(&["division", "league"]) {
        score += 30;
    }
    if t.contains("friendly") {
        score += 10;
    }
    score
}

/// One summary per competition name, most popular first.
pub fn competitions_from_records(records: &[Record]) -> Vec<CompetitionSummary> {
    let mut order: Vec<&str> = Vec::new();
    let mut groups: HashMap<&str, Vec<&Record>> = HashMap::new();
    for r in records {
        groups
            .entry(r.competition.as_str())
            .or_insert_with(|| {
                order.push(r.competition.as_str());
                Vec::new()
            })
            .push(r);
    }

    let mut out: Vec<CompetitionSummary> = order
        .into_iter()
        .filter_map(|name| {
            let items = groups.get(name)?;
            let first = items.iter().min_by(|a, b| (&a.date, &a.time).cmp(&(&b.date, &b.time)))?;
            Some(CompetitionSummary {
                name: name.to_string(),
                slug: slugify(name),
                popularity: popularity_score(name),
                match_count: items.len(),
                first_kickoff: kickoff_utc(&first.date, &first.time),
            })
        })
        .collect();

    out.sort_by(|a, b| {
        b.popularity
            .cmp(&a.popularity)
            .then(b.match_count.cmp(&a.match_count))
            .then_with(|| a.first_kickoff.cmp(&b.first_kickoff))
    });
    out
}

/// The three leading competitions among records on the coming weekend.
pub fn weekend_top_competitions(records: &[Record], today: NaiveDate) -> Vec<CompetitionSummary> {
    let (sat, sun) = next_weekend_boundaries(today);
    let (start, end) = (iso(sat), iso(sun));
    let weekend: Vec<Record> = records
        .iter()
        .filter(|r| is_date_in_window(&r.date, &start, &end))
        .cloned()
        .collect();
    let mut comps = competitions_from_records(&weekend);
    comps.truncate(3);
    comps
}

/// London date/time as a UTC ISO-8601 instant. Unparseable dates fall back to
/// the raw `dateTtime` text so the summary still sorts sensibly.
fn kickoff_utc(date: &str, time: &str) -> String {
    match parse_date(date) {
        Some(d) => {
            let t = parse_time(time).unwrap_or(NaiveTime::MIN);
            london_to_utc(d, t).format("%Y-%m-%dT%H:%M:%SZ").to_string()
        }
        None => format!("{}T{}", date, time),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_collapses_separators() {
        assert_eq!(slugify("  Corn Uí Mhuirí -- U20 "), "corn-ui-mhuiri-u20");
        assert_eq!(slugify("Ulster Senior Football Championship"), "ulster-senior-football-championship");
    }

    #[test]
    fn kickoff_converts_from_london() {
        assert_eq!(kickoff_utc("2025-07-12", "15:30"), "2025-07-12T14:30:00Z");
        assert_eq!(kickoff_utc("2025-11-01", "15:30"), "2025-11-01T15:30:00Z");
    }
}
