//! Board snapshots.

use std::collections::HashMap;

use thiserror::Error;

use crate::{Piece, Position, Side};

/// Errors that can occur when editing a [`ChessBoard`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    #[error("cannot store a piece at {0}: position is off the board")]
    OffBoard(Position),
}

/// Read-only view of which piece, if any, stands on each square.
///
/// Move generation only ever calls [`Board::occupant_at`] with on-board
/// positions. What an implementation returns for an off-board position is
/// left to it.
pub trait Board {
    /// Returns the piece on `position`, or `None` if the square is empty.
    fn occupant_at(&self, position: Position) -> Option<Piece>;
}

impl<B: Board + ?Sized> Board for &B {
    #[inline]
    fn occupant_at(&self, position: Position) -> Option<Piece> {
        (**self).occupant_at(position)
    }
}

impl<S: std::hash::BuildHasher> Board for HashMap<Position, Piece, S> {
    #[inline]
    fn occupant_at(&self, position: Position) -> Option<Piece> {
        self.get(&position).copied()
    }
}

/// An 8x8 board backed by a flat array.
#[derive(Clone, PartialEq, Eq)]
pub struct ChessBoard {
    squares: [Option<Piece>; 64],
}

impl ChessBoard {
    /// Creates an empty board.
    pub const fn new() -> Self {
        ChessBoard {
            squares: [None; 64],
        }
    }

    /// Puts `piece` on `position`, returning whatever stood there before.
    pub fn place(&mut self, position: Position, piece: Piece) -> Result<Option<Piece>, BoardError> {
        let slot = self.slot_mut(position)?;
        Ok(slot.replace(piece))
    }

    /// Clears `position`, returning the piece that stood there.
    pub fn remove(&mut self, position: Position) -> Result<Option<Piece>, BoardError> {
        let slot = self.slot_mut(position)?;
        Ok(slot.take())
    }

    /// Returns the piece on `position`. Off-board positions are always empty.
    #[inline]
    pub fn piece_at(&self, position: Position) -> Option<Piece> {
        if position.is_on_board() {
            self.squares[position.index()]
        } else {
            None
        }
    }

    /// Iterates over occupied squares, row by row from (1,1).
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(move |position| {
            self.squares[position.index()].map(|piece| (position, piece))
        })
    }

    /// Iterates over the squares occupied by `side`.
    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.side() == side)
    }

    /// Returns true if no square is occupied.
    pub fn is_empty(&self) -> bool {
        self.squares.iter().all(Option::is_none)
    }

    fn slot_mut(&mut self, position: Position) -> Result<&mut Option<Piece>, BoardError> {
        if position.is_on_board() {
            Ok(&mut self.squares[position.index()])
        } else {
            Err(BoardError::OffBoard(position))
        }
    }
}

impl Default for ChessBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl Board for ChessBoard {
    #[inline]
    fn occupant_at(&self, position: Position) -> Option<Piece> {
        self.piece_at(position)
    }
}

impl std::fmt::Debug for ChessBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.pieces()).finish()
    }
}
