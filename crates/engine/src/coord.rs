//! Cell coordinates.
//!
//! A `Coord` identifies one cell within a sheet. Coordinates order
//! row-major (row first, then column), which is also the canonical order
//! the snapshot codec emits.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A (row, column) cell coordinate, 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    /// Row index (0-based; row 0 is the header row)
    pub row: usize,
    /// Column index (0-based)
    pub col: usize,
}

impl Coord {
    /// Create a new coordinate.
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// True for cells in the reserved header row.
    #[inline]
    pub fn is_header(&self) -> bool {
        self.row == 0
    }

    /// Textual key form used by the snapshot document: `"row-col"`.
    pub fn to_key(&self) -> String {
        format!("{}-{}", self.row, self.col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // A1-style for human-facing output: 0=A, 1=B, ..., 25=Z, 26=AA
        let mut letters = String::new();
        let mut n = self.col;
        loop {
            letters.insert(0, (b'A' + (n % 26) as u8) as char);
            if n < 26 {
                break;
            }
            n = n / 26 - 1;
        }
        write!(f, "{}{}", letters, self.row + 1)
    }
}

impl FromStr for Coord {
    type Err = ParseCoordError;

    /// Parse the snapshot key form `"row-col"`.
    ///
    /// Strict: each part must be plain ASCII digits (no sign, no
    /// whitespace), so keys like `"+1-2"` are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        fn digits(part: &str) -> Option<usize> {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            part.parse().ok()
        }

        let mut parts = s.splitn(2, '-');
        let row = parts
            .next()
            .and_then(digits)
            .ok_or_else(|| ParseCoordError(s.to_string()))?;
        let col = parts
            .next()
            .and_then(digits)
            .ok_or_else(|| ParseCoordError(s.to_string()))?;
        Ok(Self { row, col })
    }
}

/// A snapshot key did not have the `"row-col"` shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCoordError(pub String);

impl fmt::Display for ParseCoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid cell key '{}': expected 'row-col'", self.0)
    }
}

impl std::error::Error for ParseCoordError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_round_trip() {
        let c = Coord::new(3, 17);
        assert_eq!(c.to_key(), "3-17");
        assert_eq!("3-17".parse::<Coord>().unwrap(), c);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<Coord>().is_err());
        assert!("3".parse::<Coord>().is_err());
        assert!("a-b".parse::<Coord>().is_err());
        assert!("-1-2".parse::<Coord>().is_err());
        assert!("1.5-2".parse::<Coord>().is_err());
    }

    #[test]
    fn test_parse_rejects_signs_and_whitespace() {
        assert!("+1-2".parse::<Coord>().is_err());
        assert!("1-+2".parse::<Coord>().is_err());
        assert!(" 1-2".parse::<Coord>().is_err());
        assert!("1- 2".parse::<Coord>().is_err());
    }

    #[test]
    fn test_row_major_order() {
        let mut coords = vec![
            Coord::new(2, 0),
            Coord::new(1, 1),
            Coord::new(1, 0),
            Coord::new(0, 5),
        ];
        coords.sort();
        assert_eq!(
            coords,
            vec![
                Coord::new(0, 5),
                Coord::new(1, 0),
                Coord::new(1, 1),
                Coord::new(2, 0),
            ]
        );
    }

    #[test]
    fn test_display_a1_style() {
        assert_eq!(format!("{}", Coord::new(0, 0)), "A1");
        assert_eq!(format!("{}", Coord::new(9, 25)), "Z10");
        assert_eq!(format!("{}", Coord::new(0, 26)), "AA1");
    }

    #[test]
    fn test_is_header() {
        assert!(Coord::new(0, 3).is_header());
        assert!(!Coord::new(1, 0).is_header());
    }
}
