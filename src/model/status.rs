use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[default]
    #[serde(rename = "scheduled")]
    Scheduled,
    /// Full time; the record should carry a score.
    #[serde(rename = "FT")]
    FullTime,
    #[serde(rename = "PP")]
    Postponed,
}
