//! Rook, bishop and queen moves.

use chess_core::{Board, Move, Position, Side};

use super::offsets::{DIAGONAL, ORTHOGONAL, QUEEN_DIRECTIONS};
use super::{MoveList, Occupancy};

/// Generates pseudo-legal rook moves (no castling).
pub fn rook_moves<B: Board + ?Sized>(board: &B, side: Side, from: Position) -> MoveList {
    slide_moves(board, side, from, &ORTHOGONAL)
}

/// Generates pseudo-legal bishop moves.
pub fn bishop_moves<B: Board + ?Sized>(board: &B, side: Side, from: Position) -> MoveList {
    slide_moves(board, side, from, &DIAGONAL)
}

/// Generates pseudo-legal queen moves.
pub fn queen_moves<B: Board + ?Sized>(board: &B, side: Side, from: Position) -> MoveList {
    slide_moves(board, side, from, &QUEEN_DIRECTIONS)
}

/// Walks each ray outward from `from`. A ray ends at the board edge, after
/// an enemy piece (which is captured), or before an allied piece.
fn slide_moves<B: Board + ?Sized>(
    board: &B,
    side: Side,
    from: Position,
    directions: &[(i8, i8)],
) -> MoveList {
    let mut moves = MoveList::new();

    for &(d_row, d_col) in directions {
        let mut current = from;
        while let Some(to) = current.offset(d_row, d_col) {
            match Occupancy::classify(board, side, to) {
                Occupancy::Open => moves.push(Move::normal(from, to)),
                Occupancy::Capture => {
                    moves.push(Move::normal(from, to));
                    break;
                }
                Occupancy::SameSide => break,
            }
            current = to;
        }
    }

    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::{ChessBoard, Piece, PieceKind};

    fn place(board: &mut ChessBoard, row: i8, col: i8, side: Side, kind: PieceKind) {
        board
            .place(Position::new(row, col), Piece::new(side, kind))
            .unwrap();
    }

    #[test]
    fn rook_on_empty_board_covers_row_and_column() {
        let board = ChessBoard::new();
        let origin = Position::new(4, 4);
        let moves = rook_moves(&board, Side::White, origin);

        assert_eq!(moves.len(), 14);
        assert!(moves
            .iter()
            .all(|m| m.to().row() == 4 || m.to().col() == 4));
        assert!(!moves.iter().any(|m| m.to() == origin));
    }

    #[test]
    fn rook_in_corner_has_fourteen_moves() {
        let board = ChessBoard::new();
        assert_eq!(rook_moves(&board, Side::Black, Position::new(8, 8)).len(), 14);
    }

    #[test]
    fn bishop_counts() {
        let board = ChessBoard::new();
        assert_eq!(bishop_moves(&board, Side::White, Position::new(4, 4)).len(), 13);
        assert_eq!(bishop_moves(&board, Side::White, Position::new(1, 1)).len(), 7);
        assert_eq!(bishop_moves(&board, Side::White, Position::new(1, 4)).len(), 7);
    }

    #[test]
    fn queen_in_centre_has_twenty_seven_moves() {
        let board = ChessBoard::new();
        assert_eq!(queen_moves(&board, Side::White, Position::new(4, 4)).len(), 27);
        assert_eq!(queen_moves(&board, Side::White, Position::new(5, 5)).len(), 27);
        assert_eq!(queen_moves(&board, Side::White, Position::new(1, 1)).len(), 21);
    }

    #[test]
    fn capture_ends_ray() {
        let mut board = ChessBoard::new();
        place(&mut board, 4, 6, Side::Black, PieceKind::Pawn);
        let origin = Position::new(4, 4);
        let moves = rook_moves(&board, Side::White, origin);

        assert!(moves.contains(&Move::normal(origin, Position::new(4, 5))));
        assert!(moves.contains(&Move::normal(origin, Position::new(4, 6))));
        assert!(!moves.iter().any(|m| m.to() == Position::new(4, 7)));
        assert!(!moves.iter().any(|m| m.to() == Position::new(4, 8)));
        assert_eq!(moves.len(), 12);
    }

    #[test]
    fn ally_blocks_ray_without_move() {
        let mut board = ChessBoard::new();
        place(&mut board, 6, 6, Side::White, PieceKind::Knight);
        let origin = Position::new(4, 4);
        let moves = bishop_moves(&board, Side::White, origin);

        assert!(moves.contains(&Move::normal(origin, Position::new(5, 5))));
        assert!(!moves.iter().any(|m| m.to() == Position::new(6, 6)));
        assert!(!moves.iter().any(|m| m.to() == Position::new(7, 7)));
        assert_eq!(moves.len(), 10);
    }

    #[test]
    fn adjacent_allies_leave_no_moves() {
        let mut board = ChessBoard::new();
        for (row, col) in [(1, 4), (1, 6), (2, 4), (2, 5), (2, 6)] {
            place(&mut board, row, col, Side::White, PieceKind::Pawn);
        }
        let moves = queen_moves(&board, Side::White, Position::new(1, 5));
        assert!(moves.is_empty());
    }

    #[test]
    fn rays_are_independent() {
        let mut board = ChessBoard::new();
        place(&mut board, 5, 4, Side::White, PieceKind::Pawn);
        place(&mut board, 4, 5, Side::Black, PieceKind::Pawn);
        let origin = Position::new(4, 4);
        let moves = rook_moves(&board, Side::White, origin);

        // Up: blocked at once. Right: one capture. Down: 3. Left: 3.
        assert_eq!(moves.len(), 7);
        assert!(moves.contains(&Move::normal(origin, Position::new(1, 4))));
        assert!(moves.contains(&Move::normal(origin, Position::new(4, 1))));
    }
}
