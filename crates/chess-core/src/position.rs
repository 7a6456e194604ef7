//! Board coordinates.

use std::fmt;
use thiserror::Error;

/// Errors that can occur when constructing a position.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PositionError {
    #[error("position ({row},{col}) is off the board: rows and columns run from 1 to 8")]
    OffBoard { row: i8, col: i8 },
}

/// A square on the board, addressed by row and column.
///
/// Rows and columns both run from 1 to 8. Row 1 is White's back rank and
/// column 1 is the queenside edge.
///
/// [`Position::new`] does not range-check, so a position may temporarily
/// point off the board while a candidate square is being computed. Such a
/// value must pass [`Position::is_on_board`] before it is used to look up
/// a board. [`Position::offset`] and [`Position::try_new`] only ever
/// return on-board positions, and neither does deserialization.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawPosition"))]
pub struct Position {
    row: i8,
    col: i8,
}

/// Unchecked wire form of a [`Position`], validated through `try_new`.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawPosition {
    row: i8,
    col: i8,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPosition> for Position {
    type Error = PositionError;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        Position::try_new(raw.row, raw.col)
    }
}

impl Position {
    /// Lowest valid row or column.
    pub const MIN: i8 = 1;
    /// Highest valid row or column.
    pub const MAX: i8 = 8;

    /// Creates a position without range checking.
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Position { row, col }
    }

    /// Creates a position, rejecting coordinates outside 1..=8.
    pub const fn try_new(row: i8, col: i8) -> Result<Self, PositionError> {
        let position = Position { row, col };
        if position.is_on_board() {
            Ok(position)
        } else {
            Err(PositionError::OffBoard { row, col })
        }
    }

    /// Returns the row (1-8 when on the board).
    #[inline]
    pub const fn row(self) -> i8 {
        self.row
    }

    /// Returns the column (1-8 when on the board).
    #[inline]
    pub const fn col(self) -> i8 {
        self.col
    }

    /// Returns true if both coordinates lie in 1..=8.
    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.row >= Self::MIN
            && self.row <= Self::MAX
            && self.col >= Self::MIN
            && self.col <= Self::MAX
    }

    /// Returns the position shifted by the given deltas, or `None` if the
    /// result is off the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let shifted = Position::new(
            self.row.checked_add(d_row)?,
            self.col.checked_add(d_col)?,
        );
        shifted.is_on_board().then_some(shifted)
    }

    /// Iterates over all 64 on-board positions, row by row.
    pub fn all() -> impl Iterator<Item = Position> {
        (Self::MIN..=Self::MAX)
            .flat_map(|row| (Self::MIN..=Self::MAX).map(move |col| Position::new(row, col)))
    }

    /// Returns the index (0-63) of an on-board position, row-major from (1,1).
    #[inline]
    pub(crate) const fn index(self) -> usize {
        debug_assert!(self.is_on_board());
        ((self.row - 1) as usize) * 8 + (self.col - 1) as usize
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({},{})", self.row, self.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}
