//! Pseudo-legal move generation.
//!
//! Given a board snapshot, a piece and the square it stands on,
//! [`generate`] returns every move that respects the piece's movement
//! geometry, the board edges and occupancy: a piece never lands on an
//! allied piece and may capture an enemy one. Moves that would leave the
//! mover's own king in check are still included; filtering those out is
//! the job of the legality layer built on top of this crate.
//!
//! # Example
//!
//! ```
//! use chess_core::{ChessBoard, Piece, PieceKind, Position, Side};
//! use chess_movegen::generate;
//!
//! let mut board = ChessBoard::new();
//! let rook = Piece::new(Side::White, PieceKind::Rook);
//! let d4 = Position::new(4, 4);
//! board.place(d4, rook).unwrap();
//!
//! let moves = generate(&board, rook, d4);
//! assert_eq!(moves.len(), 14);
//! ```

pub mod movegen;

pub use movegen::{
    bishop_moves, generate, generate_for_side, king_moves, knight_moves, pawn_moves,
    queen_moves, rook_moves, MoveList, Occupancy,
};
