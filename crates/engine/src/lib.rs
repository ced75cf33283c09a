pub mod coord;
pub mod error;
pub mod sheet;
pub mod workbook;

/// Fixed grid height (rows per sheet, including the header row).
pub const GRID_ROWS: usize = 100;

/// Fixed grid width (columns A-Z).
pub const GRID_COLS: usize = 26;

/// Structural label at (0,0) of every sheet: the "name" column header.
pub const HEADER_NAME: &str = "二维码名称";

/// Structural label at (0,1) of every sheet: the "content" column header.
pub const HEADER_CONTENT: &str = "二维码内容";
