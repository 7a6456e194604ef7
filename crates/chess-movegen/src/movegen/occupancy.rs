//! Classification of target squares.

use chess_core::{Board, Position, Side};

/// What a moving piece finds on a target square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Occupancy {
    /// The square is empty.
    Open,
    /// The square holds an opposing piece.
    Capture,
    /// The square holds an allied piece.
    SameSide,
}

impl Occupancy {
    /// Classifies `target` for a piece of `side`.
    ///
    /// `target` must be on the board.
    #[inline]
    pub fn classify<B: Board + ?Sized>(board: &B, side: Side, target: Position) -> Self {
        debug_assert!(target.is_on_board(), "classified off-board square {}", target);
        match board.occupant_at(target) {
            None => Occupancy::Open,
            Some(occupant) if occupant.side() == side => Occupancy::SameSide,
            Some(_) => Occupancy::Capture,
        }
    }

    /// Returns true if a non-pawn piece may move onto the square.
    #[inline]
    pub const fn is_enterable(self) -> bool {
        matches!(self, Occupancy::Open | Occupancy::Capture)
    }
}
