use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitionSummary {
    pub name: String,
    pub slug: String,
    pub popularity: u32,
    pub match_count: usize,
    // ISO-8601 UTC, e.g. 2025-11-01T14:30:00Z
    pub first_kickoff: String,
}
