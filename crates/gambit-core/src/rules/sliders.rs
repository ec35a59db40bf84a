//! Rook and bishop movement; the queen combines both.

use crate::board::Board;
use crate::square::Square;

/// A rook moves along a rank or file through empty squares.
pub(super) fn rook_reaches(board: &Board, from: Square, to: Square) -> bool {
    let (d_row, d_col) = from.delta(to);
    (d_row == 0) != (d_col == 0) && path_clear(board, from, to)
}

/// A bishop moves along a diagonal through empty squares.
pub(super) fn bishop_reaches(board: &Board, from: Square, to: Square) -> bool {
    let (d_row, d_col) = from.delta(to);
    d_row != 0 && d_row.abs() == d_col.abs() && path_clear(board, from, to)
}

/// Return `true` if no piece stands strictly between `from` and `to`.
///
/// The two squares must share a rank, file or diagonal.
fn path_clear(board: &Board, from: Square, to: Square) -> bool {
    let (d_row, d_col) = from.delta(to);
    let (step_row, step_col) = (d_row.signum(), d_col.signum());
    let mut current = from.offset(step_row, step_col);
    while let Some(sq) = current {
        if sq == to {
            return true;
        }
        if board.is_occupied(sq) {
            return false;
        }
        current = sq.offset(step_row, step_col);
    }
    // Walked off the board without meeting `to`: not aligned.
    false
}
