//! Terminal-state detection: checkmate and stalemate.
//!
//! Both are found by brute force: every (source, destination) pair for the
//! side to move is run through full validation. The search only reads the
//! board.

use std::fmt;

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::square::Square;

/// Where the game stands for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Not in check, with at least one legal move.
    Ongoing,
    /// In check, with at least one legal move.
    Check,
    /// In check with no legal move.
    Checkmate {
        /// The side that delivered mate.
        winner: Color,
    },
    /// Not in check and no legal move.
    Stalemate,
}

impl GameStatus {
    /// Return `true` if the game is over.
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate { .. } | GameStatus::Stalemate)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "in progress"),
            GameStatus::Check => write!(f, "check"),
            GameStatus::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            GameStatus::Stalemate => write!(f, "stalemate"),
        }
    }
}

impl Board {
    /// Every legal move for the side to move.
    fn legal_move_iter(&self) -> impl Iterator<Item = Move> + '_ {
        self.pieces_of(self.side_to_move())
            .flat_map(|(from, _)| Square::all().map(move |to| Move::new(from, to)))
            .filter(move |&mv| self.is_legal(mv))
    }

    /// Return `true` if the side to move has at least one legal move.
    pub fn has_legal_move(&self) -> bool {
        self.legal_move_iter().next().is_some()
    }

    /// Collect every legal move for the side to move, in square order.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.legal_move_iter().collect()
    }

    /// Legal destinations for the piece on `from`. Empty if the square is
    /// empty or holds a piece of the side not on move.
    pub fn legal_moves_from(&self, from: Square) -> Vec<Move> {
        Square::all()
            .map(|to| Move::new(from, to))
            .filter(|&mv| self.is_legal(mv))
            .collect()
    }

    /// Return `true` if the side to move is checkmated.
    pub fn is_checkmate(&self) -> bool {
        self.is_in_check(self.side_to_move()) && !self.has_legal_move()
    }

    /// Return `true` if the side to move is stalemated.
    pub fn is_stalemate(&self) -> bool {
        !self.is_in_check(self.side_to_move()) && !self.has_legal_move()
    }

    /// Classify the position for the side to move.
    pub fn status(&self) -> GameStatus {
        let us = self.side_to_move();
        match (self.is_in_check(us), self.has_legal_move()) {
            (false, true) => GameStatus::Ongoing,
            (true, true) => GameStatus::Check,
            (true, false) => GameStatus::Checkmate { winner: us.flip() },
            (false, false) => GameStatus::Stalemate,
        }
    }
}
