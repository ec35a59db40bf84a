//! FEN parsing and serialization for [`Board`].
//!
//! Only piece placement and the active color carry meaning here. Castling,
//! en passant and the move counters are accepted on input and ignored, and
//! are not written on output.

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::color::Color;
use crate::error::FenError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// FEN for the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w";

impl FromStr for Board {
    type Err = FenError;

    fn from_str(fen: &str) -> Result<Board, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if !(2..=6).contains(&fields.len()) {
            return Err(FenError::WrongFieldCount {
                found: fields.len(),
            });
        }

        let ranks: Vec<&str> = fields[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }

        let mut cells = [None; Square::COUNT];
        // FEN lists rank 8 first, which is row 0.
        for (row, rank_str) in ranks.iter().enumerate() {
            let mut col = 0usize;
            for c in rank_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(FenError::InvalidPieceChar { character: c });
                    }
                    col += digit as usize;
                    continue;
                }
                let piece =
                    Piece::from_fen_char(c).ok_or(FenError::InvalidPieceChar { character: c })?;
                if col >= 8 {
                    return Err(FenError::BadRankLength {
                        rank_index: row,
                        length: col + 1,
                    });
                }
                cells[row * 8 + col] = Some(mark_displaced_pawn(piece, row));
                col += 1;
            }
            if col != 8 {
                return Err(FenError::BadRankLength {
                    rank_index: row,
                    length: col,
                });
            }
        }

        let side_to_move = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidColor {
                    found: other.to_string(),
                });
            }
        };

        Ok(Board::from_cells(cells, side_to_move)?)
    }
}

/// A pawn away from its home row must have moved, so it loses the double step.
fn mark_displaced_pawn(piece: Piece, row: usize) -> Piece {
    if piece.kind() == PieceKind::Pawn && row != piece.color().pawn_home_row() as usize {
        piece.moved()
    } else {
        piece
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0u8..8 {
            let mut empty = 0u8;
            for col in 0u8..8 {
                let piece = Square::from_row_col(row, col).and_then(|sq| self.piece_at(sq));
                match piece {
                    Some(piece) => {
                        if empty > 0 {
                            write!(f, "{empty}")?;
                            empty = 0;
                        }
                        write!(f, "{}", piece.fen_char())?;
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                write!(f, "{empty}")?;
            }
            if row < 7 {
                write!(f, "/")?;
            }
        }
        write!(f, " {}", self.side_to_move().fen_char())
    }
}
