//! Attack detection.
//!
//! Attacks are purely geometric. An attacker is never asked whether moving
//! would expose its own king, so this never recurses into move validation.

use crate::board::Board;
use crate::color::Color;
use crate::rules;
use crate::square::Square;

impl Board {
    /// Return `true` if `sq` is attacked by any piece of `by_color`.
    pub fn is_square_attacked(&self, sq: Square, by_color: Color) -> bool {
        self.pieces_of(by_color)
            .any(|(from, piece)| rules::attacks(self, piece, from, sq))
    }

    /// Return `true` if the king of `color` is attacked by the opponent.
    pub fn is_in_check(&self, color: Color) -> bool {
        self.is_square_attacked(self.king_square(color), color.flip())
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::color::Color;
    use crate::square::Square;

    #[test]
    fn starting_position_attacks() {
        let board = Board::starting_position();
        assert!(board.is_square_attacked(Square::F3, Color::White));
        assert!(board.is_square_attacked(Square::D3, Color::White));
        assert!(!board.is_square_attacked(Square::E4, Color::White));
        assert!(board.is_square_attacked(Square::F6, Color::Black));
        assert!(!board.is_square_attacked(Square::E5, Color::Black));
        assert!(!board.is_in_check(Color::White));
        assert!(!board.is_in_check(Color::Black));
    }

    #[test]
    fn pawn_push_square_is_not_attacked() {
        let board: Board = "4k3/8/8/8/8/8/4P3/K7 w".parse().unwrap();
        assert!(!board.is_square_attacked(Square::E3, Color::White));
        assert!(board.is_square_attacked(Square::D3, Color::White));
        assert!(board.is_square_attacked(Square::F3, Color::White));
    }

    #[test]
    fn slider_check_is_blocked_by_interposition() {
        let open: Board = "4k3/8/8/8/8/8/8/r3K3 w".parse().unwrap();
        assert!(open.is_in_check(Color::White));

        let blocked: Board = "4k3/8/8/8/8/8/8/rN2K3 w".parse().unwrap();
        assert!(!blocked.is_in_check(Color::White));
    }

    #[test]
    fn knight_and_pawn_checks() {
        let knight: Board = "4k3/8/8/8/8/5n2/8/4K3 w".parse().unwrap();
        assert!(knight.is_in_check(Color::White));

        let pawn: Board = "4k3/8/8/8/8/8/3p4/4K3 w".parse().unwrap();
        assert!(pawn.is_in_check(Color::White));

        let pawn_ahead: Board = "4k3/8/8/8/8/8/4p3/4K3 w".parse().unwrap();
        assert!(!pawn_ahead.is_in_check(Color::White));
    }

    #[test]
    fn attacker_pinned_to_its_own_king_still_gives_check() {
        // Bishop e7 is pinned against e8 by the rook on e1 but still checks a3.
        let board: Board = "4k3/4b3/8/8/8/K7/8/4R3 w".parse().unwrap();
        assert!(board.is_in_check(Color::White));
    }
}
