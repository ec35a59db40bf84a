//! A move request: a source and destination square.

use std::fmt;

use crate::square::Square;

/// A move from one square to another.
///
/// Carries no piece information; the board decides what the move means.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Move {
        Move { from, to }
    }

    /// Build a move from two coordinate texts, e.g. `("e2", "e4")`.
    pub fn from_coords(from: &str, to: &str) -> Option<Move> {
        Some(Move::new(Square::parse(from)?, Square::parse(to)?))
    }

    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Return `true` if source and destination coincide.
    #[inline]
    pub fn is_null(self) -> bool {
        self.from == self.to
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self})")
    }
}
