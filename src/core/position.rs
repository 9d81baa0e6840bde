//! Grid coordinates and displacements.
//!
//! ## Position
//!
//! Signed `(row, col)` pair. Players start off the grid at
//! [`START_POSITION`](super::rules::START_POSITION) and every jump is plain
//! vector addition, so a position may lie outside any grid.
//!
//! ## Jump
//!
//! Signed `(rows, cols)` displacement requested by a dig.

use serde::{Deserialize, Serialize};

/// A signed grid coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Row index (may be negative).
    pub row: i64,
    /// Column index (may be negative).
    pub col: i64,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    /// Position reached by applying `jump` to this one, or `None` if either
    /// coordinate overflows.
    #[must_use]
    pub fn offset(self, jump: Jump) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add(jump.rows)?,
            col: self.col.checked_add(jump.cols)?,
        })
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A signed displacement across the grid.
///
/// ```
/// use dig_contest::core::{Jump, Position};
///
/// let start = Position::new(-1, -1);
/// assert_eq!(start.offset(Jump::new(1, 2)), Some(Position::new(0, 1)));
/// assert!(Jump::new(0, 0).is_zero());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Jump {
    /// Row displacement.
    pub rows: i64,
    /// Column displacement.
    pub cols: i64,
}

impl Jump {
    /// Create a new jump.
    #[must_use]
    pub const fn new(rows: i64, cols: i64) -> Self {
        Self { rows, cols }
    }

    /// True for the (0, 0) jump, the only displacement a dig rejects.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.rows == 0 && self.cols == 0
    }
}

impl std::fmt::Display for Jump {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:+}, {:+}]", self.rows, self.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_adds_componentwise() {
        let p = Position::new(2, 3);
        assert_eq!(p.offset(Jump::new(-1, 4)), Some(Position::new(1, 7)));
        assert_eq!(p.offset(Jump::new(0, -5)), Some(Position::new(2, -2)));
    }

    #[test]
    fn test_offset_overflow_is_none() {
        let start = Position::new(-1, -1);
        assert_eq!(start.offset(Jump::new(i64::MIN, 1)), None);
        assert_eq!(Position::new(1, 0).offset(Jump::new(i64::MAX, 0)), None);
        assert_eq!(
            start.offset(Jump::new(i64::MAX, 0)),
            Some(Position::new(i64::MAX - 1, -1))
        );
    }

    #[test]
    fn test_zero_jump() {
        assert!(Jump::new(0, 0).is_zero());
        assert!(!Jump::new(0, 1).is_zero());
        assert!(!Jump::new(-1, 0).is_zero());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Position::new(-1, 4)), "(-1, 4)");
        assert_eq!(format!("{}", Jump::new(2, -3)), "[+2, -3]");
    }

    #[test]
    fn test_position_serialization() {
        let p = Position::new(-1, 7);
        let json = serde_json::to_string(&p).unwrap();
        let deserialized: Position = serde_json::from_str(&json).unwrap();
        assert_eq!(p, deserialized);
    }
}
