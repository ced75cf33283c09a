//! Best-effort loading of the default startup document.
//!
//! Counterpart of the manual import path, with the opposite failure
//! visibility: a missing or unusable default document is logged and
//! swallowed, and the caller keeps its built-in sheets. Manual import
//! stays loud. The asymmetry is deliberate ("best-effort enhancement"
//! vs. "explicit user action").

use std::path::Path;

use qrgrid_engine::sheet::Sheet;

use crate::snapshot;

/// Try to load the startup document. Any failure returns `None` after a
/// log line; this never surfaces an error to the user.
pub fn load_default(path: &Path) -> Option<Vec<Sheet>> {
    match snapshot::read_document(path) {
        Ok(sheets) => {
            log::info!(
                "loaded startup document {} ({} sheet(s))",
                path.display(),
                sheets.len()
            );
            Some(sheets)
        }
        Err(err) => {
            log::warn!(
                "could not load startup document {}, keeping defaults: {}",
                path.display(),
                err
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qrgrid_engine::coord::Coord;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_swallowed() {
        let dir = tempdir().unwrap();
        assert!(load_default(&dir.path().join("absent.json")).is_none());
    }

    #[test]
    fn test_unparseable_file_is_swallowed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{{{{").unwrap();
        assert!(load_default(&path).is_none());
    }

    #[test]
    fn test_empty_document_is_swallowed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.json");
        fs::write(&path, "{}").unwrap();
        assert!(load_default(&path).is_none());
    }

    #[test]
    fn test_usable_document_loads() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("fy.json");
        fs::write(&path, r#"{"Home": {"data": {"1-0": "router"}}}"#).unwrap();

        let sheets = load_default(&path).unwrap();
        assert_eq!(sheets[0].name, "Home");
        assert_eq!(sheets[0].get(Coord::new(1, 0)), "router");
    }
}
