use serde::{Deserialize, Serialize};

use crate::competition::shorten;
use crate::dates::format_time;
use crate::model::record::Record;

/// A record plus the derived labels the page layer displays next to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    #[serde(flatten)]
    pub record: Record,
    pub competition_label: String,
    pub kickoff: String,
}

impl From<&Record> for Listing {
    fn from(record: &Record) -> Self {
        Listing {
            competition_label: shorten(&record.competition),
            kickoff: format_time(&record.date, &record.time),
            record: record.clone(),
        }
    }
}
