//! King movement. Castling is not supported.

use crate::square::Square;

/// A king steps one square in any direction.
pub(super) fn king_reaches(from: Square, to: Square) -> bool {
    let (d_row, d_col) = from.delta(to);
    d_row.abs() <= 1 && d_col.abs() <= 1 && (d_row, d_col) != (0, 0)
}

#[cfg(test)]
mod tests {
    use super::king_reaches;
    use crate::square::Square;

    #[test]
    fn eight_neighbours_in_the_center() {
        let count = Square::all().filter(|&to| king_reaches(Square::E4, to)).count();
        assert_eq!(count, 8);
    }

    #[test]
    fn three_neighbours_in_the_corner() {
        let count = Square::all().filter(|&to| king_reaches(Square::H8, to)).count();
        assert_eq!(count, 3);
    }

    #[test]
    fn no_castling_step() {
        assert!(!king_reaches(Square::E1, Square::G1));
        assert!(!king_reaches(Square::E1, Square::C1));
        assert!(!king_reaches(Square::E1, Square::E1));
    }
}
