use std::fmt;

/// Snapshot import/export failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    /// The import document names zero sheets.
    EmptyImport,
    /// The payload is not parseable as the snapshot format.
    MalformedDocument(String),
    /// File read/write error.
    Io(String),
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyImport => write!(f, "import document contains no sheets"),
            Self::MalformedDocument(msg) => write!(f, "malformed snapshot document: {msg}"),
            Self::Io(msg) => write!(f, "IO error: {msg}"),
        }
    }
}

impl std::error::Error for SnapshotError {}
