//! Move representation.

use crate::{PieceKind, Position};
use std::fmt;

/// A move from one square to another, with an optional pawn promotion.
///
/// Two moves are equal only if origin, destination and promotion all match.
/// The derived ordering compares origin, then destination, then promotion
/// (no promotion sorts first, then kinds in [`PieceKind`] declaration order),
/// which gives callers a stable way to sort generated moves.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    from: Position,
    to: Position,
    promotion: Option<PieceKind>,
}

impl Move {
    /// Creates a new move.
    #[inline]
    pub const fn new(from: Position, to: Position, promotion: Option<PieceKind>) -> Self {
        Move {
            from,
            to,
            promotion,
        }
    }

    /// Creates a move without promotion.
    #[inline]
    pub const fn normal(from: Position, to: Position) -> Self {
        Self::new(from, to, None)
    }

    /// Creates a pawn move that promotes to `kind`.
    #[inline]
    pub const fn promoting(from: Position, to: Position, kind: PieceKind) -> Self {
        Self::new(from, to, Some(kind))
    }

    /// Returns the origin square.
    #[inline]
    pub const fn from(self) -> Position {
        self.from
    }

    /// Returns the destination square.
    #[inline]
    pub const fn to(self) -> Position {
        self.to
    }

    /// Returns the kind a pawn promotes to, if this is a promotion.
    #[inline]
    pub const fn promotion(self) -> Option<PieceKind> {
        self.promotion
    }

    /// Returns true if this is a promotion.
    #[inline]
    pub const fn is_promotion(self) -> bool {
        self.promotion.is_some()
    }

    /// Placeholder used to fill unused move list slots; never generated.
    pub const NULL: Move = Move::normal(Position::new(0, 0), Position::new(0, 0));
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.promotion {
            Some(kind) => write!(f, "[{}, {}, {}]", self.from, self.to, kind),
            None => write!(f, "[{}, {}]", self.from, self.to),
        }
    }
}
