use serde::{Deserialize, Serialize};

use crate::error::WorkbookError;
use crate::sheet::Sheet;

/// The sheet registry: every sheet in insertion order, plus which one is
/// active.
///
/// Invariants:
/// - sheet names are unique (case-sensitive exact match),
/// - the registry is never empty after construction,
/// - `active` always indexes a live sheet.
///
/// There is no per-sheet delete; sheets only disappear when the whole
/// registry is swapped by `replace_all` (import).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workbook {
    sheets: Vec<Sheet>,
    active: usize,
}

impl Default for Workbook {
    fn default() -> Self {
        Self::new()
    }
}

impl Workbook {
    /// Create a workbook with the two built-in default sheets.
    pub fn new() -> Self {
        Self {
            sheets: vec![Sheet::new("Sheet1"), Sheet::new("Sheet2")],
            active: 0,
        }
    }

    /// Number of sheets.
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    /// All sheet names, in insertion order.
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }

    /// Name of the active sheet.
    pub fn active_sheet_name(&self) -> &str {
        &self.sheets[self.active].name
    }

    /// Reference to the active sheet.
    pub fn active_sheet(&self) -> &Sheet {
        &self.sheets[self.active]
    }

    /// Mutable reference to the active sheet.
    pub fn active_sheet_mut(&mut self) -> &mut Sheet {
        &mut self.sheets[self.active]
    }

    /// Find a sheet by name (exact match).
    pub fn sheet_by_name(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    /// Iterate all sheets in insertion order.
    pub fn sheets(&self) -> impl Iterator<Item = &Sheet> + '_ {
        self.sheets.iter()
    }

    fn name_exists(&self, name: &str) -> bool {
        self.sheets.iter().any(|s| s.name == name)
    }

    /// Append a new header-seeded sheet with the given name.
    ///
    /// Does NOT switch the active sheet; call sites wanting that must do so
    /// explicitly. Returns the new sheet's index.
    pub fn create(&mut self, name: &str) -> Result<usize, WorkbookError> {
        if self.name_exists(name) {
            return Err(WorkbookError::DuplicateName(name.to_string()));
        }
        self.sheets.push(Sheet::new(name));
        Ok(self.sheets.len() - 1)
    }

    /// Append a new sheet with an auto-generated `Sheet{n}` name,
    /// starting at count+1 and bumping until unique.
    pub fn add_sheet(&mut self) -> usize {
        let mut n = self.sheets.len() + 1;
        while self.name_exists(&format!("Sheet{}", n)) {
            n += 1;
        }
        self.sheets.push(Sheet::new(&format!("Sheet{}", n)));
        self.sheets.len() - 1
    }

    /// Rename a sheet, keeping its contents and insertion-order position.
    ///
    /// No-op when the new name is empty after trimming or equal to the old
    /// one. If `old` named the active sheet, the active name follows.
    pub fn rename(&mut self, old: &str, new: &str) -> Result<(), WorkbookError> {
        let new = new.trim();
        if new.is_empty() || new == old {
            return Ok(());
        }
        if self.name_exists(new) {
            return Err(WorkbookError::DuplicateName(new.to_string()));
        }
        let sheet = self
            .sheets
            .iter_mut()
            .find(|s| s.name == old)
            .ok_or_else(|| WorkbookError::NotFound(old.to_string()))?;
        sheet.name = new.to_string();
        Ok(())
    }

    /// Make the named sheet active.
    pub fn set_active(&mut self, name: &str) -> Result<(), WorkbookError> {
        match self.sheets.iter().position(|s| s.name == name) {
            Some(idx) => {
                self.active = idx;
                Ok(())
            }
            None => Err(WorkbookError::NotFound(name.to_string())),
        }
    }

    /// Wholesale registry swap (import landing point). No merge: the
    /// previous contents are discarded entirely. Fails without touching
    /// anything if `sheets` is empty or repeats a name; on success the
    /// first incoming sheet becomes active.
    pub fn replace_all(&mut self, sheets: Vec<Sheet>) -> Result<(), WorkbookError> {
        if sheets.is_empty() {
            return Err(WorkbookError::EmptyReplacement);
        }
        for (i, sheet) in sheets.iter().enumerate() {
            if sheets[..i].iter().any(|s| s.name == sheet.name) {
                return Err(WorkbookError::DuplicateName(sheet.name.clone()));
            }
        }
        self.sheets = sheets;
        self.active = 0;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::Coord;

    #[test]
    fn test_new_workbook() {
        let wb = Workbook::new();
        assert_eq!(wb.sheet_count(), 2);
        assert_eq!(wb.active_sheet_name(), "Sheet1");
        assert_eq!(wb.sheet_names(), vec!["Sheet1", "Sheet2"]);
    }

    #[test]
    fn test_create_does_not_switch_active() {
        let mut wb = Workbook::new();
        let idx = wb.create("Inventory").unwrap();
        assert_eq!(idx, 2);
        assert_eq!(wb.active_sheet_name(), "Sheet1");
        assert_eq!(wb.sheet_names(), vec!["Sheet1", "Sheet2", "Inventory"]);
    }

    #[test]
    fn test_create_duplicate_fails_unchanged() {
        let mut wb = Workbook::new();
        let err = wb.create("Sheet1").unwrap_err();
        assert_eq!(err, WorkbookError::DuplicateName("Sheet1".to_string()));
        assert_eq!(wb.sheet_count(), 2);
    }

    #[test]
    fn test_duplicate_check_is_case_sensitive() {
        let mut wb = Workbook::new();
        assert!(wb.create("sheet1").is_ok());
    }

    #[test]
    fn test_add_sheet_auto_names() {
        let mut wb = Workbook::new();
        wb.add_sheet();
        assert_eq!(wb.sheet_names(), vec!["Sheet1", "Sheet2", "Sheet3"]);

        // A hole in the numbering still resolves to a unique name
        wb.rename("Sheet3", "Devices").unwrap();
        wb.add_sheet();
        assert_eq!(
            wb.sheet_names(),
            vec!["Sheet1", "Sheet2", "Devices", "Sheet4"]
        );
    }

    #[test]
    fn test_rename_noops() {
        let mut wb = Workbook::new();
        assert!(wb.rename("Sheet1", "Sheet1").is_ok());
        assert!(wb.rename("Sheet1", "   ").is_ok());
        assert_eq!(wb.sheet_names(), vec!["Sheet1", "Sheet2"]);
    }

    #[test]
    fn test_rename_collision() {
        let mut wb = Workbook::new();
        let err = wb.rename("Sheet1", "Sheet2").unwrap_err();
        assert_eq!(err, WorkbookError::DuplicateName("Sheet2".to_string()));
        assert_eq!(wb.sheet_names(), vec!["Sheet1", "Sheet2"]);
    }

    #[test]
    fn test_rename_missing_sheet() {
        let mut wb = Workbook::new();
        let err = wb.rename("Nope", "Other").unwrap_err();
        assert_eq!(err, WorkbookError::NotFound("Nope".to_string()));
    }

    #[test]
    fn test_rename_active_follows_and_keeps_contents() {
        let mut wb = Workbook::new();
        wb.active_sheet_mut().set(Coord::new(1, 0), "door");
        wb.rename("Sheet1", "Entry Codes").unwrap();

        assert_eq!(wb.active_sheet_name(), "Entry Codes");
        assert_eq!(wb.active_sheet().get(Coord::new(1, 0)), "door");
        // Position in insertion order preserved
        assert_eq!(wb.sheet_names(), vec!["Entry Codes", "Sheet2"]);
    }

    #[test]
    fn test_set_active() {
        let mut wb = Workbook::new();
        wb.set_active("Sheet2").unwrap();
        assert_eq!(wb.active_sheet_name(), "Sheet2");

        let err = wb.set_active("Ghost").unwrap_err();
        assert_eq!(err, WorkbookError::NotFound("Ghost".to_string()));
        assert_eq!(wb.active_sheet_name(), "Sheet2");
    }

    #[test]
    fn test_replace_all() {
        let mut wb = Workbook::new();
        wb.set_active("Sheet2").unwrap();

        let incoming = vec![Sheet::new("Imported A"), Sheet::new("Imported B")];
        wb.replace_all(incoming).unwrap();
        assert_eq!(wb.sheet_names(), vec!["Imported A", "Imported B"]);
        assert_eq!(wb.active_sheet_name(), "Imported A");
    }

    #[test]
    fn test_replace_all_rejects_repeated_names() {
        let mut wb = Workbook::new();
        let incoming = vec![
            Sheet::new("Twin"),
            Sheet::new("Other"),
            Sheet::new("Twin"),
        ];
        let err = wb.replace_all(incoming).unwrap_err();
        assert_eq!(err, WorkbookError::DuplicateName("Twin".to_string()));
        assert_eq!(wb.sheet_names(), vec!["Sheet1", "Sheet2"]);
    }

    #[test]
    fn test_replace_all_empty_leaves_registry() {
        let mut wb = Workbook::new();
        let err = wb.replace_all(Vec::new()).unwrap_err();
        assert_eq!(err, WorkbookError::EmptyReplacement);
        assert_eq!(wb.sheet_names(), vec!["Sheet1", "Sheet2"]);
    }
}
