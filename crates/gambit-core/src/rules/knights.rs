//! Knight movement.

use crate::square::Square;

/// A knight jumps two squares along one axis and one along the other.
pub(super) fn knight_reaches(from: Square, to: Square) -> bool {
    let (d_row, d_col) = from.delta(to);
    matches!(
        (d_row.unsigned_abs(), d_col.unsigned_abs()),
        (2, 1) | (1, 2)
    )
}

#[cfg(test)]
mod tests {
    use super::knight_reaches;
    use crate::square::Square;

    #[test]
    fn eight_jumps_from_the_center() {
        let targets: Vec<_> = Square::all()
            .filter(|&to| knight_reaches(Square::D4, to))
            .collect();
        assert_eq!(targets.len(), 8);
        for sq in [Square::C6, Square::E6, Square::F5, Square::F3] {
            assert!(targets.contains(&sq), "{sq} missing");
        }
    }

    #[test]
    fn corner_has_two_jumps() {
        let count = Square::all().filter(|&to| knight_reaches(Square::A1, to)).count();
        assert_eq!(count, 2);
    }

    #[test]
    fn rejects_straight_and_diagonal() {
        assert!(!knight_reaches(Square::D4, Square::D6));
        assert!(!knight_reaches(Square::D4, Square::F6));
        assert!(!knight_reaches(Square::D4, Square::D4));
    }
}
