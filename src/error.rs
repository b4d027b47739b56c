use thiserror::Error;

/// Failures loading a snapshot. An unreachable source is never the same as an
/// empty one.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot source unavailable ({location}): {reason}")]
    SourceUnavailable { location: String, reason: String },

    #[error("snapshot is not a list of records: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("no snapshot location configured")]
    MissingLocation,
}

pub type Result<T> = std::result::Result<T, SnapshotError>;
