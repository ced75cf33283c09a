use std::fmt;

/// Registry-level failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkbookError {
    /// Create/rename collides with an existing sheet name (exact match).
    DuplicateName(String),
    /// Operation referenced a sheet that is not in the registry.
    NotFound(String),
    /// `replace_all` was handed zero sheets; the registry must never be empty.
    EmptyReplacement,
}

impl fmt::Display for WorkbookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateName(name) => write!(f, "sheet name already exists: '{name}'"),
            Self::NotFound(name) => write!(f, "no such sheet: '{name}'"),
            Self::EmptyReplacement => write!(f, "replacement registry has no sheets"),
        }
    }
}

impl std::error::Error for WorkbookError {}
