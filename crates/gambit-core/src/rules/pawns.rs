//! Pawn movement. No en passant and no promotion.

use crate::board::Board;
use crate::color::Color;
use crate::piece::Piece;
use crate::square::Square;

/// Pawn pushes and captures.
///
/// - one step forward onto an empty square;
/// - two steps forward from an unmoved pawn when both squares are empty;
/// - one step diagonally forward only onto an occupied square.
pub(super) fn pawn_move_valid(board: &Board, pawn: Piece, from: Square, to: Square) -> bool {
    let dir = pawn.color().pawn_direction();
    let (d_row, d_col) = from.delta(to);

    match d_col.abs() {
        0 if d_row == dir => !board.is_occupied(to),
        0 if d_row == 2 * dir => {
            !pawn.has_moved()
                && !board.is_occupied(to)
                && from
                    .offset(dir, 0)
                    .is_some_and(|mid| !board.is_occupied(mid))
        }
        1 if d_row == dir => board.is_occupied(to),
        _ => false,
    }
}

/// Return `true` if a `color` pawn on `from` attacks `to`.
pub(super) fn pawn_attacks(color: Color, from: Square, to: Square) -> bool {
    let (d_row, d_col) = from.delta(to);
    d_row == color.pawn_direction() && d_col.abs() == 1
}
