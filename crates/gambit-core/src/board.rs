//! The chess board: piece placement, side to move, and cached king squares.

use std::fmt;

use crate::chess_move::Move;
use crate::color::Color;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Complete game state for one session.
///
/// The king cache is kept equal to the actual king positions by routing every
/// mutation through [`Board::apply`].
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    /// One cell per square, indexed by [`Square::index()`].
    cells: [Option<Piece>; Square::COUNT],
    /// Which side moves next.
    side_to_move: Color,
    /// King square for each side, indexed by [`Color::index()`].
    kings: [Square; Color::COUNT],
}

impl Board {
    /// Return the standard starting position.
    pub fn starting_position() -> Board {
        let mut cells = [None; Square::COUNT];
        for (col, kind) in PieceKind::BACK_RANK.into_iter().enumerate() {
            cells[col] = Some(Piece::new(kind, Color::Black));
            cells[8 + col] = Some(Piece::new(PieceKind::Pawn, Color::Black));
            cells[48 + col] = Some(Piece::new(PieceKind::Pawn, Color::White));
            cells[56 + col] = Some(Piece::new(kind, Color::White));
        }
        Board {
            cells,
            side_to_move: Color::White,
            kings: [Square::E1, Square::E8],
        }
    }

    /// Build a board from raw cells, locating both kings.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidKingCount`] unless each side has exactly
    /// one king.
    pub(crate) fn from_cells(
        cells: [Option<Piece>; Square::COUNT],
        side_to_move: Color,
    ) -> Result<Board, BoardError> {
        let mut kings = [Square::E1, Square::E8];
        for color in Color::ALL {
            let found: Vec<Square> = Square::all()
                .filter(|sq| {
                    cells[sq.index()]
                        .is_some_and(|p| p.kind() == PieceKind::King && p.color() == color)
                })
                .collect();
            match found.as_slice() {
                [sq] => kings[color.index()] = *sq,
                _ => {
                    return Err(BoardError::InvalidKingCount {
                        color,
                        count: found.len(),
                    });
                }
            }
        }
        Ok(Board {
            cells,
            side_to_move,
            kings,
        })
    }

    /// Return the piece on the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.index()]
    }

    /// Return `true` if the given square is occupied.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.cells[sq.index()].is_some()
    }

    /// Iterate over every occupied square and its piece.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Iterate over the squares and pieces of one side.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color() == color)
    }

    /// Return the cached king square for the given side.
    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.kings[color.index()]
    }

    /// Return the side to move.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Move the piece on `mv.from()` to `mv.to()`, marking it as moved and
    /// keeping the king cache in step. Returns the captured piece, if any.
    ///
    /// Does not validate and does not touch the side to move. An empty source
    /// leaves the board unchanged.
    pub(crate) fn apply(&mut self, mv: Move) -> Option<Piece> {
        let piece = self.cells[mv.from().index()].take()?;
        let captured = self.cells[mv.to().index()].replace(piece.moved());
        if piece.kind() == PieceKind::King {
            self.kings[piece.color().index()] = mv.to();
        }
        captured
    }

    /// Hand the turn to the other side.
    #[inline]
    pub(crate) fn pass_turn(&mut self) {
        self.side_to_move = self.side_to_move.flip();
    }

    /// Check that the board holds one king per side and that the king cache
    /// matches the grid.
    pub fn validate(&self) -> Result<(), BoardError> {
        let rebuilt = Board::from_cells(self.cells, self.side_to_move)?;
        for color in Color::ALL {
            if rebuilt.king_square(color) != self.king_square(color) {
                return Err(BoardError::StaleKingSquare {
                    color,
                    cached: self.king_square(color),
                    actual: rebuilt.king_square(color),
                });
            }
        }
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{self}\")")
    }
}
