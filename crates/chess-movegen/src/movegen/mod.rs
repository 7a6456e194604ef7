//! Move generation.
//!
//! Every piece kind maps to one rule: stepping pieces (king, knight) try a
//! fixed list of offsets once, sliding pieces (rook, bishop, queen) walk rays
//! until they leave the board or hit a piece, and pawns have their own
//! forward-step, double-step, capture and promotion rules. All rules decide
//! through a single [`Occupancy`] classification of the target square.

mod occupancy;
pub mod offsets;
mod pawn;
mod sliding;
mod stepping;

use chess_core::{Board, ChessBoard, Move, Piece, PieceKind, Position, Side};

pub use occupancy::Occupancy;
pub use pawn::pawn_moves;
pub use sliding::{bishop_moves, queen_moves, rook_moves};
pub use stepping::{king_moves, knight_moves};

/// A list of moves with a fixed maximum capacity.
///
/// A single piece has at most 27 pseudo-legal moves (a queen in the centre
/// of an empty board), so the moves of one piece always fit in a fixed-size
/// array and generation needs no heap allocation.
#[derive(Clone)]
pub struct MoveList {
    moves: [Move; Self::MAX_MOVES],
    len: usize,
}

impl MoveList {
    /// Maximum number of moves one piece can have, rounded up.
    pub const MAX_MOVES: usize = 32;

    /// Creates an empty move list.
    #[inline]
    pub const fn new() -> Self {
        MoveList {
            moves: [Move::NULL; Self::MAX_MOVES],
            len: 0,
        }
    }

    /// Adds a move to the list.
    #[inline]
    pub fn push(&mut self, m: Move) {
        debug_assert!(self.len < Self::MAX_MOVES);
        self.moves[self.len] = m;
        self.len += 1;
    }

    /// Returns the number of moves.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    /// Returns an iterator over the moves.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    /// Returns true if the list holds `m`.
    #[inline]
    pub fn contains(&self, m: &Move) -> bool {
        self.as_slice().contains(m)
    }

    /// Sorts the moves by origin, destination, then promotion kind.
    ///
    /// Generation order is unspecified; call this before comparing lists.
    pub fn sort(&mut self) {
        self.moves[..self.len].sort_unstable();
    }

    /// Copies the moves into a `Vec`.
    pub fn to_vec(&self) -> Vec<Move> {
        self.as_slice().to_vec()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Generates the pseudo-legal moves of `piece` standing on `position`.
///
/// `position` must be on the board and hold `piece`; neither is checked.
/// The board is only read, and only at on-board squares.
pub fn generate<B: Board + ?Sized>(board: &B, piece: Piece, position: Position) -> MoveList {
    let side = piece.side();
    let moves = match piece.kind() {
        PieceKind::King => king_moves(board, side, position),
        PieceKind::Knight => knight_moves(board, side, position),
        PieceKind::Rook => rook_moves(board, side, position),
        PieceKind::Bishop => bishop_moves(board, side, position),
        PieceKind::Queen => queen_moves(board, side, position),
        PieceKind::Pawn => pawn_moves(board, side, position),
        _ => MoveList::new(),
    };

    tracing::trace!(
        %side,
        kind = %piece.kind(),
        %position,
        count = moves.len(),
        "generated pseudo-legal moves"
    );

    moves
}

/// Generates the pseudo-legal moves of every piece `side` has on `board`.
///
/// Moves that leave `side`'s king in check are included.
pub fn generate_for_side(board: &ChessBoard, side: Side) -> Vec<Move> {
    let mut moves = Vec::new();
    let mut pieces = 0usize;

    for (position, piece) in board.pieces_of(side) {
        moves.extend_from_slice(generate(board, piece, position).as_slice());
        pieces += 1;
    }

    tracing::debug!(%side, pieces, count = moves.len(), "generated side moves");

    moves
}

/// Pushes a move, expanding it into one move per promotion kind when it
/// lands on `side`'s promotion row.
#[inline]
pub(crate) fn push_pawn_move(moves: &mut MoveList, side: Side, from: Position, to: Position) {
    if to.row() == side.promotion_row() {
        for kind in PieceKind::PROMOTIONS {
            moves.push(Move::promoting(from, to, kind));
        }
    } else {
        moves.push(Move::normal(from, to));
    }
}
