//! Error types for move validation, FEN parsing and board validation.

use crate::color::Color;
use crate::square::Square;

/// Why a move request was rejected. Variants are listed in the order the
/// checks run; the first failing check is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IllegalMove {
    /// Source and destination are the same square.
    #[error("source and destination are both {square}")]
    NullMove {
        /// The repeated square.
        square: Square,
    },
    /// There is no piece on the source square.
    #[error("no piece on {square}")]
    EmptySource {
        /// The empty source square.
        square: Square,
    },
    /// The piece on the source square belongs to the side not on move.
    #[error("it is {to_move}'s turn")]
    WrongTurn {
        /// The side whose turn it is.
        to_move: Color,
    },
    /// The destination holds a piece of the mover's own color.
    #[error("{square} is occupied by a piece of the same color")]
    SelfCapture {
        /// The occupied destination.
        square: Square,
    },
    /// The piece cannot reach the destination under its movement rule.
    #[error("the piece on {from} cannot move to {to}")]
    IllegalGeometry {
        /// Source square.
        from: Square,
        /// Destination square.
        to: Square,
    },
    /// The move would leave the mover's own king attacked.
    #[error("the move would leave the {color} king in check")]
    ExposesKing {
        /// The side that would be in check.
        color: Color,
    },
}

/// Errors that occur when parsing a FEN string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    /// Fewer than 2 or more than 6 space-separated fields.
    #[error("expected 2 to 6 FEN fields, found {found}")]
    WrongFieldCount {
        /// Number of fields found.
        found: usize,
    },
    /// The piece placement does not have exactly 8 ranks.
    #[error("expected 8 ranks in piece placement, found {found}")]
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank describes more or fewer than 8 squares.
    #[error("rank {rank_index} describes {length} squares, expected 8")]
    BadRankLength {
        /// Zero-based rank index (0 = rank 8).
        rank_index: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character in the piece placement.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// The active color is not "w" or "b".
    #[error("invalid active color: \"{found}\"")]
    InvalidColor {
        /// The invalid color string.
        found: String,
    },
    /// The placement parsed but does not describe a playable board.
    #[error("invalid board: {source}")]
    InvalidBoard {
        /// The underlying validation error.
        #[from]
        source: BoardError,
    },
}

/// Errors from structural validation of a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A side does not have exactly one king.
    #[error("expected 1 king for {color}, found {count}")]
    InvalidKingCount {
        /// Which side has the wrong king count.
        color: Color,
        /// Number of kings found.
        count: usize,
    },
    /// The cached king square disagrees with the grid.
    #[error("{color} king cached on {cached} but found on {actual}")]
    StaleKingSquare {
        /// Which side's cache is stale.
        color: Color,
        /// The cached square.
        cached: Square,
        /// Where the king actually is.
        actual: Square,
    },
}
