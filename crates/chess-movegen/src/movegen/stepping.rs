//! King and knight moves.

use chess_core::{Board, Move, Position, Side};

use super::offsets::{KING_OFFSETS, KNIGHT_OFFSETS};
use super::{MoveList, Occupancy};

/// Generates pseudo-legal king moves (no castling).
pub fn king_moves<B: Board + ?Sized>(board: &B, side: Side, from: Position) -> MoveList {
    step_moves(board, side, from, &KING_OFFSETS)
}

/// Generates pseudo-legal knight moves.
pub fn knight_moves<B: Board + ?Sized>(board: &B, side: Side, from: Position) -> MoveList {
    step_moves(board, side, from, &KNIGHT_OFFSETS)
}

fn step_moves<B: Board + ?Sized>(
    board: &B,
    side: Side,
    from: Position,
    offsets: &[(i8, i8)],
) -> MoveList {
    let mut moves = MoveList::new();

    for &(d_row, d_col) in offsets {
        let Some(to) = from.offset(d_row, d_col) else {
            continue;
        };
        if Occupancy::classify(board, side, to).is_enterable() {
            moves.push(Move::normal(from, to));
        }
    }

    moves
}
