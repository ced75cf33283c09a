//! Mirror instructions for the rendering surface.
//!
//! Session mutations return these instead of touching any UI directly.
//! The surface applies them verbatim; this is what keeps the grid cell and
//! the single-line proxy (formula bar) showing identical text without the
//! surface polling the store.

/// Events emitted by `Session` transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncEvent {
    /// The grid surface must show `text` at (row, col) on the active sheet.
    CellText {
        row: usize,
        col: usize,
        text: String,
    },

    /// The single-line proxy must show `text`.
    ProxyText { text: String },

    /// The sheet tab strip must re-enumerate the registry.
    SheetListChanged,

    /// The surface must repaint every cell from the named (now active) sheet.
    SheetLoaded { name: String },
}

impl SyncEvent {
    /// Shorthand constructor for cell mirror updates.
    pub fn cell(row: usize, col: usize, text: &str) -> Self {
        Self::CellText {
            row,
            col,
            text: text.to_string(),
        }
    }

    /// Shorthand constructor for proxy mirror updates.
    pub fn proxy(text: &str) -> Self {
        Self::ProxyText {
            text: text.to_string(),
        }
    }
}
