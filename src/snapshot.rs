use std::fs;
use std::path::Path;

use tracing::{error, info, info_span, instrument, warn};

use crate::error::{Result, SnapshotError};
use crate::model::record::Record;

/// Records from one published fixtures/results JSON document.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub records: Vec<Record>,
}

impl Snapshot {
    /// Fetch and parse a snapshot over HTTP.
    #[instrument(level = "info")]
    pub fn from_url(url: &str) -> Result<Self> {
        let unavailable = |reason: String| {
            error!(url = %url, error = %reason, "Snapshot fetch failed");
            SnapshotError::SourceUnavailable { location: url.to_string(), reason }
        };
        let response = {
            let _span = info_span!("snapshot_fetch", url = %url).entered();
            ureq::get(url).call()
        }
        .map_err(|e| unavailable(format!("request failed: {}", e)))?;

        let mut body_reader = response.into_body();
        let body = body_reader
            .read_to_string()
            .map_err(|e| unavailable(format!("failed to read response body: {}", e)))?;
        Self::from_json(&body)
    }

    /// Read a snapshot from a local file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let body = fs::read_to_string(path).map_err(|e| SnapshotError::SourceUnavailable {
            location: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_json(&body)
    }

    /// Parse a snapshot body (no I/O).
    #[instrument(level = "info", skip(body), fields(bytes = body.len()))]
    pub fn from_json(body: &str) -> Result<Self> {
        let records: Vec<Record> = serde_json::from_str(body).map_err(|e| {
            error!(error = %e, "Failed to deserialize snapshot");
            SnapshotError::from(e)
        })?;
        let issues = validate(&records);
        for issue in &issues {
            let id = records.get(issue.index).map(|r| r.id.as_str()).unwrap_or("");
            warn!(index = issue.index, id = %id, issue = %issue.message, "Snapshot record issue");
        }
        info!(records = records.len(), issues = issues.len(), "Loaded snapshot");
        Ok(Snapshot { records })
    }
}

/// A problem found by [`validate`], tied to the record's position in the snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub index: usize,
    pub message: String,
}

/// Check that every record carries the fields the page layer relies on.
/// Reports the first missing required field per record, plus FT records with
/// no score. An empty snapshot is valid.
pub fn validate(records: &[Record]) -> Vec<Issue> {
    let mut issues = Vec::new();
    for (index, r) in records.iter().enumerate() {
        let required = [
            ("id", &r.id),
            ("date", &r.date),
            ("time", &r.time),
            ("competition", &r.competition),
            ("home", &r.home),
            ("away", &r.away),
        ];
        if let Some((field, _)) = required.iter().find(|(_, v)| v.trim().is_empty()) {
            issues.push(Issue { index, message: format!("missing {}", field) });
        }
        if r.is_full_time() && r.score.trim().is_empty() {
            issues.push(Issue { index, message: "full-time without score".to_string() });
        }
    }
    issues
}
