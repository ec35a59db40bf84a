//! Move validation and execution.
//!
//! King safety is tested copy-make style: the candidate move is applied to a
//! scratch copy of the board, so the real board is never left half-moved.

use tracing::{debug, trace};

use crate::board::Board;
use crate::chess_move::Move;
use crate::error::IllegalMove;
use crate::piece::Piece;
use crate::rules;

impl Board {
    /// Return `true` if playing `mv` would leave the mover's king attacked.
    ///
    /// Returns `false` when the source square is empty.
    pub fn would_expose_check(&self, mv: Move) -> bool {
        let Some(piece) = self.piece_at(mv.from()) else {
            return false;
        };
        let mut scratch = *self;
        scratch.apply(mv);
        scratch.is_in_check(piece.color())
    }

    /// Run every legality check on `mv` for the side to move.
    ///
    /// # Errors
    ///
    /// Returns the first failed check as an [`IllegalMove`].
    pub fn validate_move(&self, mv: Move) -> Result<(), IllegalMove> {
        if mv.is_null() {
            return Err(IllegalMove::NullMove { square: mv.from() });
        }
        let piece = self
            .piece_at(mv.from())
            .ok_or(IllegalMove::EmptySource { square: mv.from() })?;
        if piece.color() != self.side_to_move() {
            return Err(IllegalMove::WrongTurn {
                to_move: self.side_to_move(),
            });
        }
        if self
            .piece_at(mv.to())
            .is_some_and(|target| target.color() == piece.color())
        {
            return Err(IllegalMove::SelfCapture { square: mv.to() });
        }
        if !rules::is_piece_move_valid(self, piece, mv.from(), mv.to()) {
            return Err(IllegalMove::IllegalGeometry {
                from: mv.from(),
                to: mv.to(),
            });
        }
        if self.would_expose_check(mv) {
            return Err(IllegalMove::ExposesKing {
                color: piece.color(),
            });
        }
        Ok(())
    }

    /// Return `true` if `mv` is legal for the side to move.
    #[inline]
    pub fn is_legal(&self, mv: Move) -> bool {
        self.validate_move(mv).is_ok()
    }

    /// Validate and commit `mv`, then pass the turn. Returns the captured
    /// piece, if any.
    ///
    /// # Errors
    ///
    /// Returns the reason the move was rejected; the board is unchanged.
    pub fn play(&mut self, mv: Move) -> Result<Option<Piece>, IllegalMove> {
        if let Err(reason) = self.validate_move(mv) {
            debug!(%mv, %reason, "move rejected");
            return Err(reason);
        }
        let captured = self.apply(mv);
        self.pass_turn();
        trace!(%mv, ?captured, to_move = %self.side_to_move(), "move committed");
        Ok(captured)
    }

    /// Return `true` if the move given as two coordinate texts is legal.
    /// Unparsable coordinates are never legal.
    pub fn is_valid_move(&self, from: &str, to: &str) -> bool {
        Move::from_coords(from, to).is_some_and(|mv| self.is_legal(mv))
    }

    /// Play the move given as two coordinate texts. Returns `false`, leaving
    /// the board untouched, if the coordinates do not parse or the move is
    /// illegal.
    pub fn make_move(&mut self, from: &str, to: &str) -> bool {
        match Move::from_coords(from, to) {
            Some(mv) => self.play(mv).is_ok(),
            None => {
                debug!(from, to, "unparsable coordinates");
                false
            }
        }
    }
}
