use std::fmt;

#[derive(Debug, Clone)]
/// Snapshot loading errors
///
/// Enrichment sources (items row, ladder experience) degrade to an absent field on
/// [`Unavailable`]/[`Parse`], only the primary character profile escalates to [`NotFound`].
///
/// [`Unavailable`]: SnapshotError::Unavailable
/// [`Parse`]: SnapshotError::Parse
/// [`NotFound`]: SnapshotError::NotFound
pub enum SnapshotError {
    /// The source couldn't be fetched, or answered with a non success status
    Unavailable(String),
    /// The source was fetched but its content couldn't be parsed
    Parse(String),
    /// The primary character profile is missing
    NotFound(String),
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable(what) => write!(f, "Snapshot '{}' is unavailable", what),
            Self::Parse(what) => write!(f, "Snapshot '{}' is malformed", what),
            Self::NotFound(name) => write!(f, "Data for '{}' not found", name),
        }
    }
}
impl std::error::Error for SnapshotError {}
