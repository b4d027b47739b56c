//! Language-agnostic search over records.
//!
//! Corpus and query pass through the same Irish→English token map, so a search
//! for "Ciarraí" finds "Kerry" fixtures and the other way round.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::model::record::Record;

/// Irish token → English token. Keys are lowercase and diacritic-stripped; no
/// value is also a key, which keeps `normalize` idempotent.
const IRISH_TOKENS: &[(&str, &str)] = &[
    // counties
    ("aontroim", "antrim"),
    ("mhacha", "armagh"),
    ("ceatharlach", "carlow"),
    ("cabhan", "cavan"),
    ("clar", "clare"),
    ("corcaigh", "cork"),
    ("doire", "derry"),
    ("ngall", "donegal"),
    ("cliath", "dublin"),
    ("manach", "fermanagh"),
    ("gaillimh", "galway"),
    ("ciarrai", "kerry"),
    ("dara", "kildare"),
    ("chainnigh", "kilkenny"),
    ("liatroim", "leitrim"),
    ("luimneach", "limerick"),
    ("longfort", "longford"),
    ("lu", "louth"),
    ("eo", "mayo"),
    ("mhi", "meath"),
    ("muineachan", "monaghan"),
    ("fhaili", "offaly"),
    ("comain", "roscommon"),
    ("sligeach", "sligo"),
    ("tiobraid", "tipperary"),
    ("eoghain", "tyrone"),
    ("lairge", "waterford"),
    ("iarmhi", "westmeath"),
    ("garman", "wexford"),
    ("mhantain", "wicklow"),
    // provinces
    ("connachta", "connacht"),
    ("laighin", "leinster"),
    ("mumhain", "munster"),
    ("mumha", "munster"),
    ("ulaidh", "ulster"),
    // competitions
    ("peil", "football"),
    ("iomaint", "hurling"),
    ("iomana", "hurling"),
    ("camogaiocht", "camogie"),
    ("sinsir", "senior"),
    ("idirmheanach", "intermediate"),
    ("soisir", "junior"),
    ("mionur", "minor"),
    ("craobh", "championship"),
    ("corn", "cup"),
    ("sraith", "league"),
    ("roinn", "division"),
    ("ceannais", "final"),
    ("leathcheannais", "semi-final"),
    ("ceathrunach", "quarter-final"),
    ("babhta", "round"),
    // clubs and venues
    ("cumann", "club"),
    ("naomh", "st"),
    ("gaeil", "gaels"),
    ("pairc", "park"),
    ("staid", "stadium"),
    ("baile", "town"),
];

/// Pairs that always travel together in an index.
const SYNONYMS: &[(&str, &str)] = &[("senior", "sfc"), ("intermediate", "ifc"), ("junior", "jfc")];

static IRISH_TO_ENGLISH: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| IRISH_TOKENS.iter().copied().collect());

/// Decompose and drop combining marks: "Ciarraí" -> "Ciarrai".
pub fn strip_diacritics(s: &str) -> String {
    s.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Lowercase, diacritic-stripped text with every character outside
/// `[a-z0-9 -]` replaced by a space. Whitespace is left uncollapsed.
pub fn fold(s: &str) -> String {
    strip_diacritics(&s.to_lowercase())
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' | '-' => c,
            c if c.is_whitespace() => c,
            _ => ' ',
        })
        .collect()
}

/// Folded tokens before the Irish map is applied.
fn raw_tokens(s: &str) -> Vec<String> {
    fold(s).split_whitespace().map(str::to_string).collect()
}

fn map_token(token: &str) -> &str {
    IRISH_TO_ENGLISH.get(token).copied().unwrap_or(token)
}

pub fn normalize(text: &str) -> String {
    fold(text)
        .split_whitespace()
        .map(map_token)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Index string for one record: mapped tokens from home, away, competition
/// and venue, the unmapped folded tokens, and synonym partners.
pub fn build_index(record: &Record) -> String {
    let text = [
        record.home.as_str(),
        record.away.as_str(),
        record.competition.as_str(),
        record.venue_str(),
    ]
    .join(" ");

    let mut index = TokenSet::default();
    for tok in normalize(&text).split_whitespace() {
        index.push(tok);
    }
    // Keep the Irish spellings too so partial Irish queries still hit
    for tok in raw_tokens(&text) {
        index.push(&tok);
    }
    for (a, b) in SYNONYMS {
        if index.contains(a) || index.contains(b) {
            index.push(a);
            index.push(b);
        }
    }

    index.tokens.join(" ")
}

/// Insertion-ordered set of tokens.
#[derive(Default)]
struct TokenSet {
    seen: HashSet<String>,
    tokens: Vec<String>,
}

impl TokenSet {
    fn push(&mut self, token: &str) {
        if self.seen.insert(token.to_string()) {
            self.tokens.push(token.to_string());
        }
    }

    fn contains(&self, token: &str) -> bool {
        self.seen.contains(token)
    }
}

/// Every query token must occur somewhere in the index (substring match).
pub fn matches_query(index: &str, query: &str) -> bool {
    normalize(query).split_whitespace().all(|tok| index.contains(tok))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_values_are_fixed_points() {
        for (irish, english) in IRISH_TOKENS {
            assert_eq!(fold(irish), *irish, "key {} must already be folded", irish);
            assert!(!IRISH_TO_ENGLISH.contains_key(english), "{} is both a key and a value", english);
            assert_eq!(normalize(english), *english);
        }
    }

    #[test]
    fn fold_replaces_punctuation() {
        assert_eq!(fold("St. Brigid's"), "st  brigid s");
        assert_eq!(normalize("  Ciarraí  v  Áth Cliath "), "kerry v ath dublin");
    }
}
