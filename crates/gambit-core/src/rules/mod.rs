//! Per-piece movement rules.
//!
//! Everything here is purely geometric: turn order, target color and king
//! safety are layered on top by [`Board::validate_move`](crate::Board::validate_move).

mod king;
mod knights;
mod pawns;
mod sliders;

use crate::board::Board;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use self::king::king_reaches;
use self::knights::knight_reaches;
use self::pawns::{pawn_attacks, pawn_move_valid};
use self::sliders::{bishop_reaches, rook_reaches};

/// Return `true` if `piece`, standing on `from`, may move to `to` under its
/// movement rule on this board.
///
/// A null move is never valid.
pub fn is_piece_move_valid(board: &Board, piece: Piece, from: Square, to: Square) -> bool {
    if from == to {
        return false;
    }
    match piece.kind() {
        PieceKind::Pawn => pawn_move_valid(board, piece, from, to),
        _ => reaches(board, piece.kind(), from, to),
    }
}

/// Return `true` if `piece` on `from` attacks `to`.
///
/// Same as [`is_piece_move_valid`] except for pawns, which attack their two
/// forward diagonals whether or not anything stands there, and never attack
/// straight ahead.
pub fn attacks(board: &Board, piece: Piece, from: Square, to: Square) -> bool {
    if from == to {
        return false;
    }
    match piece.kind() {
        PieceKind::Pawn => pawn_attacks(piece.color(), from, to),
        _ => reaches(board, piece.kind(), from, to),
    }
}

/// Movement rule shared by every piece except the pawn.
fn reaches(board: &Board, kind: PieceKind, from: Square, to: Square) -> bool {
    match kind {
        PieceKind::Knight => knight_reaches(from, to),
        PieceKind::King => king_reaches(from, to),
        PieceKind::Rook => rook_reaches(board, from, to),
        PieceKind::Bishop => bishop_reaches(board, from, to),
        PieceKind::Queen => rook_reaches(board, from, to) || bishop_reaches(board, from, to),
        PieceKind::Pawn => false,
    }
}

#[cfg(test)]
mod tests {
    use super::{attacks, is_piece_move_valid};
    use crate::board::Board;
    use crate::square::Square;

    fn check(board: &Board, from: Square, to: Square) -> bool {
        let piece = board.piece_at(from).expect("source must be occupied");
        is_piece_move_valid(board, piece, from, to)
    }

    #[test]
    fn null_move_is_never_valid() {
        let board: Board = "4k3/8/8/8/3Q4/8/8/4K3 w".parse().unwrap();
        assert!(!check(&board, Square::D4, Square::D4));
        assert!(!check(&board, Square::E1, Square::E1));
        let queen = board.piece_at(Square::D4).unwrap();
        assert!(!attacks(&board, queen, Square::D4, Square::D4));
    }

    #[test]
    fn starting_position_knights_jump_over_pawns() {
        let board = Board::starting_position();
        assert!(check(&board, Square::G1, Square::F3));
        assert!(check(&board, Square::G1, Square::H3));
        assert!(check(&board, Square::B8, Square::C6));
        assert!(!check(&board, Square::G1, Square::G3));
    }

    #[test]
    fn starting_position_sliders_are_blocked() {
        let board = Board::starting_position();
        assert!(!check(&board, Square::F1, Square::A6));
        assert!(!check(&board, Square::A1, Square::A3));
        assert!(!check(&board, Square::D1, Square::H5));
    }

    #[test]
    fn queen_combines_rook_and_bishop() {
        let board: Board = "4k3/8/8/8/3Q4/8/8/4K3 w".parse().unwrap();
        assert!(check(&board, Square::D4, Square::D8));
        assert!(check(&board, Square::D4, Square::A4));
        assert!(check(&board, Square::D4, Square::G7));
        assert!(check(&board, Square::D4, Square::A1));
        assert!(!check(&board, Square::D4, Square::E6));
    }

    #[test]
    fn geometry_ignores_target_color() {
        // Own-piece captures are rejected by the board, not by the rule.
        let board = Board::starting_position();
        assert!(check(&board, Square::A1, Square::A2));
        assert!(check(&board, Square::E1, Square::D1));
    }

    #[test]
    fn pawn_attacks_differ_from_pawn_moves() {
        let board = Board::starting_position();
        let pawn = board.piece_at(Square::E2).unwrap();
        assert!(attacks(&board, pawn, Square::E2, Square::D3));
        assert!(attacks(&board, pawn, Square::E2, Square::F3));
        assert!(!attacks(&board, pawn, Square::E2, Square::E3));
        assert!(!is_piece_move_valid(&board, pawn, Square::E2, Square::D3));
        assert!(is_piece_move_valid(&board, pawn, Square::E2, Square::E3));
    }
}
