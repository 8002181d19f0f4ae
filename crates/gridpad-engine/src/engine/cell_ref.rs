//! Cell reference parsing and formatting.
//!
//! Provides bidirectional conversion between cell identifiers
//! (e.g., "A1", "B12", "AA3") and zero-indexed column/row coordinates.
//! Parsing knows nothing about grid size; callers check bounds separately.
//!
//! # Examples
//!
//! ```
//! use gridpad_engine::engine::CellRef;
//!
//! let cell = CellRef::from_str("B3").unwrap();
//! assert_eq!(cell.col, 1); // 0-indexed
//! assert_eq!(cell.row, 2);
//! assert_eq!(cell.to_string(), "B3");
//! ```

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

static A1_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?<letters>[A-Za-z]+)(?<numbers>[1-9][0-9]*)$").expect("valid A1 pattern")
});

/// A reference to a cell by column and row indices (0-indexed).
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct CellRef {
    pub row: usize,
    pub col: usize,
}

impl CellRef {
    pub fn new(col: usize, row: usize) -> CellRef {
        CellRef { row, col }
    }

    /// Parse a cell reference from its identifier (e.g., "A1", "b2", "AA10").
    /// Returns None if the input is invalid. Row numbers may not have leading zeros.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(name: &str) -> Option<CellRef> {
        Self::parse_a1(name)
    }

    fn parse_a1(name: &str) -> Option<CellRef> {
        let caps = A1_PATTERN.captures(name)?;
        let col = Self::letters_to_col(&caps["letters"])?;
        let row = caps["numbers"].parse::<usize>().ok()?.checked_sub(1)?;
        Some(CellRef::new(col, row))
    }

    /// Convert spreadsheet-style letters to a column index (A -> 0, Z -> 25, AA -> 26).
    pub fn letters_to_col(letters: &str) -> Option<usize> {
        if letters.is_empty() {
            return None;
        }
        let mut acc = 0usize;
        for c in letters.bytes() {
            if !c.is_ascii_alphabetic() {
                return None;
            }
            let digit = (c.to_ascii_uppercase() - b'A') as usize + 1;
            acc = acc.checked_mul(26)?.checked_add(digit)?;
        }
        acc.checked_sub(1)
    }

    /// Convert column index to spreadsheet-style letters (0 -> A, 25 -> Z, 26 -> AA).
    pub fn col_to_letters(col: usize) -> String {
        let mut result = String::new();
        let mut n = col as u128 + 1;
        while n > 0 {
            n -= 1;
            result.insert(0, (b'A' + (n % 26) as u8) as char);
            n /= 26;
        }
        result
    }

    /// The neighbouring reference `dcol` columns and `drow` rows away.
    /// Returns None when the move would leave the non-negative quadrant.
    pub fn offset(&self, dcol: isize, drow: isize) -> Option<CellRef> {
        let col = self.col.checked_add_signed(dcol)?;
        let row = self.row.checked_add_signed(drow)?;
        Some(CellRef::new(col, row))
    }
}

impl std::str::FromStr for CellRef {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_a1(s).ok_or_else(|| format!("Invalid cell reference: {}", s))
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", CellRef::col_to_letters(self.col), self.row + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::CellRef;

    #[test]
    fn test_parse_a1_overflow_returns_none() {
        let huge = format!("{}1", "Z".repeat(40));
        assert!(CellRef::from_str(&huge).is_none());
    }

    #[test]
    fn test_leading_zero_row_rejected() {
        assert!(CellRef::from_str("A01").is_none());
        assert!(CellRef::from_str("A0").is_none());
    }

    #[test]
    fn test_col_to_letters_handles_max_usize() {
        let letters = CellRef::col_to_letters(usize::MAX);
        assert!(!letters.is_empty());
        assert!(letters.chars().all(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn test_letters_and_columns_agree_past_z() {
        for col in [0, 25, 26, 51, 52, 701, 702] {
            let letters = CellRef::col_to_letters(col);
            assert_eq!(CellRef::letters_to_col(&letters), Some(col), "{letters}");
        }
        assert_eq!(CellRef::col_to_letters(701), "ZZ");
    }

    #[test]
    fn test_offset() {
        let c5 = CellRef::from_str("C5").unwrap();
        assert_eq!(c5.offset(0, 1).unwrap().to_string(), "C6");
        assert_eq!(c5.offset(-1, 0).unwrap().to_string(), "B5");
        assert!(CellRef::new(0, 0).offset(-1, 0).is_none());
        assert!(CellRef::new(0, 0).offset(0, -1).is_none());
    }
}
