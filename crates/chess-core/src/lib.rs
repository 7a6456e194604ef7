//! Core types for chess move generation.
//!
//! This crate provides the vocabulary shared between move generation and
//! the layers built on top of it:
//! - [`Side`], [`PieceKind`] and [`Piece`] for piece identity
//! - [`Position`] for board coordinates
//! - [`Move`] for generated moves
//! - [`Board`] for read-only board snapshots, with [`ChessBoard`] as the
//!   array-backed implementation

mod board;
mod mov;
mod piece;
mod position;
mod side;

pub use board::{Board, BoardError, ChessBoard};
pub use mov::Move;
pub use piece::{Piece, PieceKind};
pub use position::{Position, PositionError};
pub use side::Side;
