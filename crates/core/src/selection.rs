use serde::{Deserialize, Serialize};

/// The selection model: a single cursor cell.
///
/// There is no multi-step editing mode; every edit is a direct,
/// immediately-committed single-field write at the cursor or at an
/// explicitly addressed cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub row: usize,
    pub col: usize,
}

impl Default for Selection {
    fn default() -> Self {
        Self { row: 0, col: 0 }
    }
}

impl Selection {
    /// Create a selection at a cell.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Check if the cursor is at a cell.
    pub fn is_at(&self, row: usize, col: usize) -> bool {
        self.row == row && self.col == col
    }

    /// Move the cursor.
    pub fn select_cell(&mut self, row: usize, col: usize) {
        self.row = row;
        self.col = col;
    }
}
