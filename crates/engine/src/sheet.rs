use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::coord::Coord;
use crate::{HEADER_CONTENT, HEADER_NAME};

/// Which item field list/picker surfaces display.
///
/// Storage is unaffected; this only selects the label shown for each item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayField {
    #[default]
    Name,
    Content,
}

/// A named sheet owning one sparse cell store.
///
/// The store maps coordinates to text; absence of a key means empty.
/// Row 0 is structural: both header labels are seeded at construction and
/// re-forced at every import, never treated as user data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sheet {
    pub name: String,
    cells: FxHashMap<Coord, String>,
    pub display_field: DisplayField,
}

impl Sheet {
    /// Create a sheet with the two header cells seeded.
    pub fn new(name: &str) -> Self {
        let mut sheet = Self {
            name: name.to_string(),
            cells: FxHashMap::default(),
            display_field: DisplayField::default(),
        };
        sheet.seed_headers();
        sheet
    }

    /// Force the structural header labels into (0,0) and (0,1),
    /// overwriting whatever is there.
    pub fn seed_headers(&mut self) {
        self.cells.insert(Coord::new(0, 0), HEADER_NAME.to_string());
        self.cells.insert(Coord::new(0, 1), HEADER_CONTENT.to_string());
    }

    /// Stored value at a coordinate, or `""` if absent. Never fails.
    pub fn get(&self, coord: Coord) -> &str {
        self.cells.get(&coord).map(String::as_str).unwrap_or("")
    }

    /// Insert or overwrite a cell. Empty string is a stored value, not a
    /// deletion; re-emptying a cell does not shrink the store. Never fails.
    ///
    /// No bounds checking: coordinate range validity is the caller's
    /// responsibility (bounded by the fixed grid geometry).
    pub fn set(&mut self, coord: Coord, text: &str) {
        self.cells.insert(coord, text.to_string());
    }

    /// Unordered snapshot of current contents. Consumers impose ordering.
    pub fn entries(&self) -> impl Iterator<Item = (Coord, &str)> + '_ {
        self.cells.iter().map(|(c, v)| (*c, v.as_str()))
    }

    /// Number of stored entries (including empty-string values and headers).
    pub fn entry_count(&self) -> usize {
        self.cells.len()
    }

    /// Project non-header rows into items, ascending by row index.
    ///
    /// Column 0 feeds `name`, column 1 feeds `content`, other columns are
    /// ignored. Rows where both fields are empty are filtered out here,
    /// not deleted from storage.
    pub fn items(&self) -> Vec<Item> {
        let mut rows: Vec<usize> = self
            .cells
            .keys()
            .filter(|c| !c.is_header() && c.col <= 1)
            .map(|c| c.row)
            .collect();
        rows.sort_unstable();
        rows.dedup();

        rows.into_iter()
            .map(|row| Item {
                name: self.get(Coord::new(row, 0)).to_string(),
                content: self.get(Coord::new(row, 1)).to_string(),
            })
            .filter(|item| !item.name.is_empty() || !item.content.is_empty())
            .collect()
    }
}

/// Derived read-only view of one non-header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub content: String,
}

impl Item {
    /// The field a list surface shows for this item, per the sheet's
    /// display preference.
    pub fn label(&self, field: DisplayField) -> &str {
        match field {
            DisplayField::Name => &self.name,
            DisplayField::Content => &self.content,
        }
    }
}
