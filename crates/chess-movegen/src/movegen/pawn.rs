//! Pawn moves: forward steps, captures and promotion.

use chess_core::{Board, Position, Side};

use super::{push_pawn_move, MoveList, Occupancy};

/// Generates pseudo-legal pawn moves (no en passant).
///
/// A pawn steps forward onto an empty square, may step twice from its home
/// row when both squares are empty, and captures one square diagonally
/// forward. Any of these that lands on the promotion row yields one move
/// per promotion kind instead of a plain move.
pub fn pawn_moves<B: Board + ?Sized>(board: &B, side: Side, from: Position) -> MoveList {
    let mut moves = MoveList::new();
    let forward = side.pawn_direction();
    let is_open = |to: &Position| Occupancy::classify(board, side, *to) == Occupancy::Open;

    if let Some(single) = from.offset(forward, 0).filter(is_open) {
        push_pawn_move(&mut moves, side, from, single);

        if from.row() == side.home_row() {
            if let Some(double) = single.offset(forward, 0).filter(is_open) {
                push_pawn_move(&mut moves, side, from, double);
            }
        }
    }

    for d_col in [-1, 1] {
        let Some(to) = from.offset(forward, d_col) else {
            continue;
        };
        if Occupancy::classify(board, side, to) == Occupancy::Capture {
            push_pawn_move(&mut moves, side, from, to);
        }
    }

    moves
}
