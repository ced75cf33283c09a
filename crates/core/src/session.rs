//! The selection/edit synchronizer.
//!
//! `Session` is the single owner of all mutable state (registry +
//! selection). Edits arrive through two entry points, the grid cell and
//! the single-line proxy; a write through either must be visible
//! immediately through the other, with no buffering. Each transition runs
//! to completion and returns the mirror updates the surface must apply.

use qrgrid_engine::coord::Coord;
use qrgrid_engine::error::WorkbookError;
use qrgrid_engine::sheet::Sheet;
use qrgrid_engine::workbook::Workbook;
use qrgrid_engine::{GRID_COLS, GRID_ROWS};

use crate::events::SyncEvent;
use crate::selection::Selection;

/// Application state: one workbook, one cursor.
#[derive(Debug, Clone, Default)]
pub struct Session {
    workbook: Workbook,
    selection: Selection,
}

impl Session {
    /// Create a session over the built-in default workbook, cursor at (0,0).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session over an existing workbook (e.g. after bootstrap).
    pub fn with_workbook(workbook: Workbook) -> Self {
        Self {
            workbook,
            selection: Selection::default(),
        }
    }

    // =========================================================================
    // Reads (surface contract)
    // =========================================================================

    /// Text at a coordinate on the active sheet ("" when absent).
    pub fn cell_text(&self, row: usize, col: usize) -> &str {
        self.workbook.active_sheet().get(Coord::new(row, col))
    }

    /// All sheet names in insertion order.
    pub fn sheet_names(&self) -> Vec<&str> {
        self.workbook.sheet_names()
    }

    /// Name of the active sheet.
    pub fn active_sheet_name(&self) -> &str {
        self.workbook.active_sheet_name()
    }

    /// Current cursor position.
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Read-only registry access (item projections, export, QR picker).
    pub fn workbook(&self) -> &Workbook {
        &self.workbook
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Move the cursor. Out-of-range coordinates are a silent no-op:
    /// selection does not change and no mirror updates are emitted.
    ///
    /// A valid move reads the stored value back and pushes it to both
    /// mirrored surfaces so they agree.
    pub fn select(&mut self, row: usize, col: usize) -> Vec<SyncEvent> {
        if row >= GRID_ROWS || col >= GRID_COLS {
            return Vec::new();
        }
        self.selection.select_cell(row, col);
        let text = self.cell_text(row, col);
        vec![SyncEvent::cell(row, col, text), SyncEvent::proxy(text)]
    }

    /// Commit an edit made through the grid surface. Never fails.
    ///
    /// The proxy is updated only when the edited cell is the selected one;
    /// edits elsewhere leave it showing the selected cell's value.
    pub fn edit_cell(&mut self, row: usize, col: usize, text: &str) -> Vec<SyncEvent> {
        self.workbook
            .active_sheet_mut()
            .set(Coord::new(row, col), text);
        if self.selection.is_at(row, col) {
            vec![SyncEvent::proxy(text)]
        } else {
            Vec::new()
        }
    }

    /// Commit an edit made through the single-line proxy: writes at the
    /// cursor and mirrors the text into the grid's visible cell.
    pub fn edit_via_proxy(&mut self, text: &str) -> Vec<SyncEvent> {
        let Selection { row, col } = self.selection;
        self.workbook
            .active_sheet_mut()
            .set(Coord::new(row, col), text);
        vec![SyncEvent::cell(row, col, text)]
    }

    /// Switch the active sheet, then reset the cursor to (0,0) — in that
    /// order, so the reset reads from the new sheet.
    pub fn switch_sheet(&mut self, name: &str) -> Result<Vec<SyncEvent>, WorkbookError> {
        self.workbook.set_active(name)?;
        let mut events = vec![SyncEvent::SheetLoaded {
            name: name.to_string(),
        }];
        events.extend(self.select(0, 0));
        Ok(events)
    }

    /// Create an auto-named sheet and switch to it.
    pub fn create_sheet(&mut self) -> Vec<SyncEvent> {
        let idx = self.workbook.add_sheet();
        let name = self.workbook.sheet_names()[idx].to_string();
        let mut events = vec![SyncEvent::SheetListChanged];
        // The sheet was just added, so the switch cannot fail
        if let Ok(more) = self.switch_sheet(&name) {
            events.extend(more);
        }
        events
    }

    /// Rename a sheet. Collisions surface as `DuplicateName` so the caller
    /// can revert its label; the empty/same-name no-op rules live in the
    /// registry.
    pub fn rename_sheet(&mut self, old: &str, new: &str) -> Result<Vec<SyncEvent>, WorkbookError> {
        self.workbook.rename(old, new)?;
        Ok(vec![SyncEvent::SheetListChanged])
    }

    /// Import landing point: swap the whole registry, activate its first
    /// sheet, reset the cursor. All-or-nothing — on error nothing changed.
    pub fn replace_all(&mut self, sheets: Vec<Sheet>) -> Result<Vec<SyncEvent>, WorkbookError> {
        self.workbook.replace_all(sheets)?;
        let name = self.workbook.active_sheet_name().to_string();
        let mut events = vec![
            SyncEvent::SheetListChanged,
            SyncEvent::SheetLoaded { name },
        ];
        events.extend(self.select(0, 0));
        Ok(events)
    }
}
