use serde::{Deserialize, Serialize};

use crate::model::status::Status;

/// One match as published in a fixtures/results snapshot.
///
/// `date` and `time` are Europe/London civil values (`YYYY-MM-DD`, `HH:MM`).
/// A time of `00:00` means the throw-in time is unknown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    // Text fields tolerate null/absent values; filters treat the blanks as
    // unwindowable dates and placeholder teams
    #[serde(default, deserialize_with = "null_as_empty")]
    pub date: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub time: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub competition: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub home: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub away: String,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub status: Status,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub score: String,
    // Club slugs (home, away) used for cross-linking by the page layer
    #[serde(default)]
    pub clubs: Option<(String, String)>,
}

impl Record {
    pub fn venue_str(&self) -> &str {
        self.venue.as_deref().unwrap_or("")
    }

    pub fn is_full_time(&self) -> bool {
        self.status == Status::FullTime
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
